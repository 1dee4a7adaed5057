#![deny(missing_docs)]
#![doc = "Branch-and-bound search for codes with a prescribed minimum Hamming distance: the decision engine for a promised size and the maximization engines built on the same frontier discipline."]

/// Greedy colouring bound.
pub mod bound;
/// YAML configuration schema and defaults.
pub mod config;
/// Per-invocation search state.
pub mod context;
/// Decision search for a promised code size.
pub mod engine;
/// Depth-indexed candidate frontiers.
pub mod frontier;
/// Branch-and-bound and probing maximization.
pub mod maximize;
/// Search results.
pub mod outcome;
/// Search counters.
pub mod stats;
/// Shared read-only tables.
pub mod tables;

pub use bound::ColoringBound;
pub use config::SearchConfig;
pub use context::SearchContext;
pub use engine::decide;
pub use frontier::FrontierArena;
pub use maximize::{maximize, maximize_by_decision};
pub use outcome::{MaximumOutcome, MaximumStatus, SearchOutcome, SearchStatus};
pub use stats::SearchStatistics;
pub use tables::SearchTables;
