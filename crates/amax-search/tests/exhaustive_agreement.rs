use amax_code::DistanceTable;
use amax_core::CodeParams;
use amax_search::{
    decide, maximize, maximize_by_decision, ColoringBound, SearchConfig, SearchTables,
};
use proptest::prelude::*;

fn largest_code(table: &DistanceTable, candidates: &[usize]) -> usize {
    fn grow(table: &DistanceTable, candidates: &[usize], size: usize, best: &mut usize) {
        *best = (*best).max(size);
        for (i, &v) in candidates.iter().enumerate() {
            if size + candidates.len() - i <= *best {
                return;
            }
            let next: Vec<usize> = candidates[i + 1..]
                .iter()
                .copied()
                .filter(|&u| table.satisfies(v, u))
                .collect();
            grow(table, &next, size + 1, best);
        }
    }
    let mut best = 0;
    grow(table, candidates, 0, &mut best);
    best
}

fn small_cases() -> Vec<(usize, u32, usize)> {
    let mut cases = Vec::new();
    for n in 1..=6 {
        for d in 1..=n {
            cases.push((n, 2, d));
        }
    }
    for n in 1..=3 {
        for d in 1..=n {
            cases.push((n, 3, d));
        }
    }
    cases.extend([(2, 4, 2), (3, 4, 2), (3, 4, 3)]);
    cases
}

fn exact_configs() -> Vec<SearchConfig> {
    vec![
        SearchConfig::plain(),
        SearchConfig::default(),
        SearchConfig {
            fix_origin: true,
            ..SearchConfig::plain()
        },
        SearchConfig {
            even_weight: true,
            ..SearchConfig::plain()
        },
        SearchConfig {
            coloring_bound: true,
            ..SearchConfig::plain()
        },
    ]
}

#[test]
fn decisions_match_brute_force_for_every_exact_config() {
    for (n, q, d) in small_cases() {
        let tables = SearchTables::build(&CodeParams::new(n, q, d).unwrap(), 1 << 8).unwrap();
        let all: Vec<usize> = (0..tables.space().len()).collect();
        let maximum = largest_code(tables.table(), &all);
        for config in exact_configs() {
            for promised in 1..=maximum + 1 {
                let outcome = decide(&tables, &config, promised).unwrap();
                assert_eq!(
                    outcome.is_success(),
                    promised <= maximum,
                    "n={n} q={q} d={d} M={promised} config={config:?}"
                );
            }
            let direct = maximize(&tables, &config).unwrap();
            assert_eq!(direct.size(), maximum, "n={n} q={q} d={d} config={config:?}");
            let probed = maximize_by_decision(&tables, &config).unwrap();
            assert_eq!(probed.size(), maximum, "n={n} q={q} d={d} config={config:?}");
        }
    }
}

#[test]
fn size_bound_never_hides_a_code() {
    // Every pruned node's subtree is checked directly.
    let tables = SearchTables::build(&CodeParams::binary(5, 3).unwrap(), 32).unwrap();
    let table = tables.table();
    for first in 0..32 {
        let frontier: Vec<usize> = (first..32).filter(|&v| table.satisfies(first, v)).collect();
        let best_below = largest_code(table, &frontier);
        for promised in 1..=6 {
            if 1 + frontier.len() < promised {
                assert!(1 + best_below < promised);
            }
        }
    }
}

proptest! {
    #[test]
    fn coloring_bound_dominates_largest_code(mask in any::<u64>()) {
        let tables = SearchTables::build(&CodeParams::binary(6, 3).unwrap(), 64).unwrap();
        let candidates: Vec<usize> = (0..64).filter(|bit| mask >> bit & 1 == 1).collect();
        let mut bound = ColoringBound::new();
        let classes = bound.classes(tables.table(), &candidates, usize::MAX);
        prop_assert!(classes >= largest_code(tables.table(), &candidates));
        prop_assert!(classes <= candidates.len());
    }

    #[test]
    fn found_codes_are_canonical_and_valid(n in 3usize..=7, d in 2usize..=3, promised in 1usize..=6) {
        let tables = SearchTables::build(&CodeParams::binary(n, d).unwrap(), 1 << 7).unwrap();
        let outcome = decide(&tables, &SearchConfig::default(), promised).unwrap();
        prop_assert!(outcome.code.windows(2).all(|pair| pair[0] < pair[1]));
        for (i, &a) in outcome.code.iter().enumerate() {
            for &b in &outcome.code[i + 1..] {
                prop_assert!(tables.table().satisfies(a, b));
            }
        }
        if outcome.is_success() {
            prop_assert_eq!(outcome.code.len(), promised);
        }
    }
}
