use amax_core::CodeParams;
use serde::{Deserialize, Serialize};

use crate::stats::SearchStatistics;

/// How a decision search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStatus {
    /// A code of the promised size was reached.
    Found,
    /// Every branch was explored or pruned without reaching the target.
    Exhausted,
    /// The node budget ran out first.
    NodeLimit,
}

/// Result of a decision search for a promised size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Parameters searched.
    pub params: CodeParams,
    /// Target size.
    pub promised_m: usize,
    /// Terminal status.
    pub status: SearchStatus,
    /// Zero-based depth of `code`; `achieved_depth + 1 >= promised_m` iff found.
    pub achieved_depth: usize,
    /// The found code, or the deepest code explored when not found.
    pub code: Vec<usize>,
    /// Search counters.
    pub statistics: SearchStatistics,
}

impl SearchOutcome {
    /// True iff a code of `promised_m` words was found.
    pub fn is_success(&self) -> bool {
        self.achieved_depth + 1 >= self.promised_m
    }
}

/// How a maximization ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaximumStatus {
    /// The tree was exhausted; `code` has maximum size.
    Proven,
    /// The node budget ran out; `code` is only a lower bound.
    NodeLimit,
}

/// Result of a maximization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaximumOutcome {
    /// Parameters searched.
    pub params: CodeParams,
    /// Terminal status.
    pub status: MaximumStatus,
    /// Size of the greedy lexicode the search started from.
    pub lexicode_size: usize,
    /// Largest code found, in increasing index order.
    pub code: Vec<usize>,
    /// Search counters.
    pub statistics: SearchStatistics,
}

impl MaximumOutcome {
    /// Size of the largest code found.
    pub fn size(&self) -> usize {
        self.code.len()
    }

    /// True when `size` is the exact maximum.
    pub fn is_proven(&self) -> bool {
        self.status == MaximumStatus::Proven
    }
}
