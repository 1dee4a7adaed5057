use amax_code::{is_canonical, verify_code};
use amax_core::CodeParams;
use amax_search::{decide, maximize, SearchConfig, SearchStatus, SearchTables};

fn tables(n: usize, q: u32, d: usize) -> SearchTables {
    SearchTables::build(&CodeParams::new(n, q, d).unwrap(), 1 << 12).unwrap()
}

fn assert_valid(tables: &SearchTables, code: &[usize]) {
    assert!(is_canonical(code));
    for (i, &a) in code.iter().enumerate() {
        for &b in &code[i + 1..] {
            assert!(tables.table().satisfies(a, b));
        }
    }
    verify_code(tables.space(), code, tables.params().min_distance()).unwrap();
}

#[test]
fn length_eight_distance_four_has_sixteen_words() {
    let tables = tables(8, 2, 4);
    let found = decide(&tables, &SearchConfig::default(), 16).unwrap();
    assert_eq!(found.status, SearchStatus::Found);
    assert_eq!(found.achieved_depth + 1, 16);
    assert_eq!(found.code.len(), 16);
    assert_valid(&tables, &found.code);

    let missing = decide(&tables, &SearchConfig::default(), 17).unwrap();
    assert_eq!(missing.status, SearchStatus::Exhausted);
    assert!(!missing.is_success());
    assert!(missing.code.len() < 17);
    assert_valid(&tables, &missing.code);
}

#[test]
fn plain_enumeration_also_finds_sixteen() {
    let tables = tables(8, 2, 4);
    let found = decide(&tables, &SearchConfig::plain(), 16).unwrap();
    assert!(found.is_success());
    assert_valid(&tables, &found.code);
}

#[test]
fn length_nine_distance_four_has_twenty_words() {
    let tables = tables(9, 2, 4);
    let found = decide(&tables, &SearchConfig::default(), 20).unwrap();
    assert!(found.is_success());
    assert_valid(&tables, &found.code);
}

#[test]
#[ignore = "exhausting the tree for 21 words takes minutes"]
fn length_nine_distance_four_has_no_twenty_one_words() {
    let tables = tables(9, 2, 4);
    let missing = decide(&tables, &SearchConfig::default(), 21).unwrap();
    assert_eq!(missing.status, SearchStatus::Exhausted);
}

#[test]
fn length_five_code_matches_raw_distances() {
    let tables = tables(5, 2, 3);
    for config in [SearchConfig::plain(), SearchConfig::default()] {
        let found = decide(&tables, &config, 4).unwrap();
        assert!(found.is_success());
        let report = verify_code(tables.space(), &found.code, 3).unwrap();
        assert_eq!(report.size, 4);
        assert!(report.min_distance.unwrap() >= 3);
        assert!(!decide(&tables, &config, 5).unwrap().is_success());
    }
}

#[test]
fn hamming_code_length_and_length_eight_distance_three() {
    let seven = tables(7, 2, 3);
    assert!(decide(&seven, &SearchConfig::default(), 16).unwrap().is_success());
    assert!(!decide(&seven, &SearchConfig::default(), 17).unwrap().is_success());

    let eight = tables(8, 2, 3);
    let found = decide(&eight, &SearchConfig::default(), 20).unwrap();
    assert!(found.is_success());
    assert_valid(&eight, &found.code);
}

#[test]
fn ternary_codes() {
    let four = tables(4, 3, 3);
    let found = decide(&four, &SearchConfig::default(), 9).unwrap();
    assert!(found.is_success());
    assert_valid(&four, &found.code);
    assert!(!decide(&four, &SearchConfig::default(), 10).unwrap().is_success());

    let three = tables(3, 3, 2);
    assert!(decide(&three, &SearchConfig::default(), 9).unwrap().is_success());
    assert!(!decide(&three, &SearchConfig::default(), 10).unwrap().is_success());

    let five = tables(5, 3, 3);
    let found = decide(&five, &SearchConfig::default(), 18).unwrap();
    assert!(found.is_success());
    assert_valid(&five, &found.code);
}

#[test]
fn maximization_on_even_distance() {
    let tables = tables(7, 2, 4);
    let outcome = maximize(&tables, &SearchConfig::default()).unwrap();
    assert!(outcome.is_proven());
    assert_eq!(outcome.size(), 8);
    assert_valid(&tables, &outcome.code);
}

#[test]
fn leading_coordinate_cut_is_only_a_heuristic() {
    // With the cut enabled the search gives up on A(8, 4) = 16.
    let tables = tables(8, 2, 4);
    let config = SearchConfig {
        symmetry_cut: true,
        ..SearchConfig::default()
    };
    let outcome = decide(&tables, &config, 16).unwrap();
    assert_eq!(outcome.status, SearchStatus::Exhausted);
    assert!(outcome.statistics.symmetry_cuts > 0);
    assert_valid(&tables, &outcome.code);
}
