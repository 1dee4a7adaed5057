use std::ops::ControlFlow;

use amax_core::{validate_target, AmaxError};
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::context::{Halt, SearchContext};
use crate::outcome::{SearchOutcome, SearchStatus};
use crate::tables::SearchTables;

enum Stop {
    Found(usize),
    Halted(Halt),
}

/// Decides whether a code of `promised_m` words is reachable through the
/// canonical increasing-index enumeration.
///
/// Exhaustion is reported through [`SearchStatus::Exhausted`], never as an
/// error. Errors only come from invalid inputs or failed allocation.
pub fn decide(
    tables: &SearchTables,
    config: &SearchConfig,
    promised_m: usize,
) -> Result<SearchOutcome, AmaxError> {
    let promised_m = validate_target(promised_m)?;
    config.validate()?;
    let levels = promised_m.min(tables.space().len());
    let mut engine = DecisionEngine {
        ctx: SearchContext::new(tables, config, levels)?,
        promised_m,
    };
    debug!(
        n = tables.params().length(),
        q = tables.params().alphabet(),
        d = tables.params().min_distance(),
        promised_m,
        "decision search started"
    );

    let (status, code) = match engine.descend(0) {
        ControlFlow::Break(Stop::Found(depth)) => {
            (SearchStatus::Found, engine.ctx.code()[..=depth].to_vec())
        }
        ControlFlow::Continue(depth) if depth + 1 >= promised_m => {
            (SearchStatus::Found, engine.ctx.code()[..=depth].to_vec())
        }
        ControlFlow::Continue(_) => (SearchStatus::Exhausted, engine.ctx.deepest().to_vec()),
        ControlFlow::Break(Stop::Halted(Halt::NodeLimit)) => {
            (SearchStatus::NodeLimit, engine.ctx.deepest().to_vec())
        }
        ControlFlow::Break(Stop::Halted(Halt::Failed(err))) => return Err(err),
    };
    let statistics = engine.ctx.statistics();
    info!(
        promised_m,
        ?status,
        size = code.len(),
        nodes = statistics.nodes,
        "decision search finished"
    );
    Ok(SearchOutcome {
        params: *tables.params(),
        promised_m,
        status,
        achieved_depth: code.len().saturating_sub(1),
        code,
        statistics,
    })
}

struct DecisionEngine<'a> {
    ctx: SearchContext<'a>,
    promised_m: usize,
}

impl DecisionEngine<'_> {
    /// Tries every candidate of `level` in order. `Continue` carries the
    /// depth this frame reached; `Break` unwinds the whole search.
    fn descend(&mut self, level: usize) -> ControlFlow<Stop, usize> {
        let target = self.promised_m;
        let cut_level = target / self.ctx.alphabet();
        for position in 0..self.ctx.candidate_count(level) {
            let word = self.ctx.candidate(level, position);
            match self.ctx.enter(level, word) {
                ControlFlow::Break(halt) => return ControlFlow::Break(Stop::Halted(halt)),
                ControlFlow::Continue(false) => continue,
                ControlFlow::Continue(true) => {}
            }
            if self.ctx.config().symmetry_cut && level >= cut_level && self.ctx.leading_nonzero(word) {
                self.ctx.record_symmetry_cut();
                return ControlFlow::Continue(level);
            }
            if level + 1 >= target {
                return ControlFlow::Break(Stop::Found(level));
            }
            let child_len = match self.ctx.expand(level, position, word) {
                Ok(len) => len,
                Err(halt) => return ControlFlow::Break(Stop::Halted(halt)),
            };
            if !self.ctx.worth_descending(level, child_len, target) {
                continue;
            }
            match self.descend(level + 1) {
                ControlFlow::Break(stop) => return ControlFlow::Break(stop),
                ControlFlow::Continue(depth) if depth + 1 >= target => {
                    return ControlFlow::Break(Stop::Found(depth));
                }
                ControlFlow::Continue(_) => {}
            }
        }
        ControlFlow::Continue(level)
    }
}
