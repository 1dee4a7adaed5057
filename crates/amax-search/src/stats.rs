use serde::{Deserialize, Serialize};

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Words placed into the code.
    pub nodes: u64,
    /// Branches abandoned by the size bound.
    pub size_prunes: u64,
    /// Branches abandoned by the colouring bound.
    pub coloring_prunes: u64,
    /// Levels ended by the leading-coordinate short-circuit.
    pub symmetry_cuts: u64,
    /// Second words skipped for not being weight representatives.
    pub second_word_skips: u64,
    /// Size of the largest code reached.
    pub deepest_size: usize,
}

impl SearchStatistics {
    /// Adds the counters of another run; `deepest_size` keeps the maximum.
    pub fn absorb(&mut self, other: &SearchStatistics) {
        self.nodes += other.nodes;
        self.size_prunes += other.size_prunes;
        self.coloring_prunes += other.coloring_prunes;
        self.symmetry_cuts += other.symmetry_cuts;
        self.second_word_skips += other.second_word_skips;
        self.deepest_size = self.deepest_size.max(other.deepest_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_sums_counters() {
        let mut total = SearchStatistics {
            nodes: 3,
            deepest_size: 4,
            ..Default::default()
        };
        total.absorb(&SearchStatistics {
            nodes: 5,
            size_prunes: 2,
            deepest_size: 2,
            ..Default::default()
        });
        assert_eq!(total.nodes, 8);
        assert_eq!(total.size_prunes, 2);
        assert_eq!(total.deepest_size, 4);
    }
}
