use std::ops::ControlFlow;

use amax_code::{lexicode, DistanceTable, SymmetryFilter, VectorSpace};
use amax_core::AmaxError;

use crate::bound::ColoringBound;
use crate::config::SearchConfig;
use crate::frontier::FrontierArena;
use crate::stats::SearchStatistics;
use crate::tables::SearchTables;

/// Reasons a search unwinds without finishing its tree.
#[derive(Debug)]
pub(crate) enum Halt {
    NodeLimit,
    Failed(AmaxError),
}

/// Mutable state of one search invocation over borrowed tables.
#[derive(Debug)]
pub struct SearchContext<'a> {
    space: &'a VectorSpace,
    table: &'a DistanceTable,
    filter: &'a SymmetryFilter,
    config: &'a SearchConfig,
    arena: FrontierArena,
    code: Vec<usize>,
    deepest: Vec<usize>,
    coloring: ColoringBound,
    stats: SearchStatistics,
}

impl<'a> SearchContext<'a> {
    /// Seeds level 0 and reserves `levels` frontier slots.
    pub fn new(
        tables: &'a SearchTables,
        config: &'a SearchConfig,
        levels: usize,
    ) -> Result<Self, AmaxError> {
        let mut arena = FrontierArena::with_levels(levels)?;
        arena.seed(&tables.initial_candidates(config))?;
        let mut code = Vec::new();
        code.try_reserve_exact(levels)?;
        Ok(Self {
            space: tables.space(),
            table: tables.table(),
            filter: tables.filter(),
            config,
            arena,
            code,
            deepest: Vec::new(),
            coloring: ColoringBound::new(),
            stats: SearchStatistics::default(),
        })
    }

    /// Configuration in force.
    pub fn config(&self) -> &SearchConfig {
        self.config
    }

    /// Alphabet size `q`.
    pub fn alphabet(&self) -> usize {
        self.space.params().alphabet() as usize
    }

    /// Words placed so far, one per level.
    pub fn code(&self) -> &[usize] {
        &self.code
    }

    /// Largest code reached so far.
    pub fn deepest(&self) -> &[usize] {
        &self.deepest
    }

    /// Counters so far.
    pub fn statistics(&self) -> SearchStatistics {
        self.stats
    }

    /// Frontier arena.
    pub fn arena(&self) -> &FrontierArena {
        &self.arena
    }

    /// Greedy code over the level-0 candidates.
    pub fn lexicode(&self) -> Vec<usize> {
        lexicode::greedy(self.table, self.arena.slot(0))
    }

    /// Number of positions of `level` the search tries.
    pub(crate) fn candidate_count(&self, level: usize) -> usize {
        let len = self.arena.len(level);
        if level == 0 && self.config.fix_origin {
            len.min(1)
        } else {
            len
        }
    }

    #[inline]
    pub(crate) fn candidate(&self, level: usize, position: usize) -> usize {
        self.arena.get(level, position)
    }

    #[inline]
    pub(crate) fn leading_nonzero(&self, word: usize) -> bool {
        self.filter.leading_nonzero(word)
    }

    pub(crate) fn record_symmetry_cut(&mut self) {
        self.stats.symmetry_cuts += 1;
    }

    /// Places `word` at `level`.
    ///
    /// Yields `false` for a second word the symmetry breaking rules out and
    /// breaks once the node budget is spent.
    pub(crate) fn enter(&mut self, level: usize, word: usize) -> ControlFlow<Halt, bool> {
        if level == 1 && self.config.second_word_fixed() && !self.space.is_weight_representative(word) {
            self.stats.second_word_skips += 1;
            return ControlFlow::Continue(false);
        }
        if let Some(limit) = self.config.max_nodes {
            if self.stats.nodes >= limit {
                return ControlFlow::Break(Halt::NodeLimit);
            }
        }
        self.stats.nodes += 1;
        self.code.truncate(level);
        self.code.push(word);
        if self.code.len() > self.deepest.len() {
            self.deepest.clear();
            self.deepest.extend_from_slice(&self.code);
            self.stats.deepest_size = self.deepest.len();
        }
        ControlFlow::Continue(true)
    }

    /// Fills the child frontier of `word`, taken at `position` of `level`.
    pub(crate) fn expand(&mut self, level: usize, position: usize, word: usize) -> Result<usize, Halt> {
        let table = self.table;
        self.arena
            .fill_child(level, position, |entry| table.satisfies(word, entry))
            .map_err(Halt::Failed)
    }

    /// Applies the size bound and, when enabled, the colouring bound to the
    /// child frontier of a code with `level + 1` words.
    pub(crate) fn worth_descending(&mut self, level: usize, child_len: usize, target: usize) -> bool {
        let placed = level + 1;
        if placed + child_len < target {
            self.stats.size_prunes += 1;
            return false;
        }
        if self.config.coloring_bound {
            let needed = target.saturating_sub(placed);
            let classes = self
                .coloring
                .classes(self.table, self.arena.slot(level + 1), needed);
            if classes < needed {
                self.stats.coloring_prunes += 1;
                return false;
            }
        }
        true
    }
}
