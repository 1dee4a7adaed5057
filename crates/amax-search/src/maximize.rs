use std::ops::ControlFlow;

use amax_core::AmaxError;
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::context::{Halt, SearchContext};
use crate::engine::decide;
use crate::outcome::{MaximumOutcome, MaximumStatus, SearchStatus};
use crate::stats::SearchStatistics;
use crate::tables::SearchTables;

/// Finds a maximum code by branch and bound.
///
/// Starts from the greedy lexicode and only descends into branches that can
/// still beat the best code so far. The leading-coordinate short-circuit is
/// never applied here.
pub fn maximize(tables: &SearchTables, config: &SearchConfig) -> Result<MaximumOutcome, AmaxError> {
    config.validate()?;
    let exact = config.exact();
    let ctx = SearchContext::new(tables, &exact, 1)?;
    let lexicode = ctx.lexicode();
    let lexicode_size = lexicode.len();
    debug!(lexicode_size, "maximization started");
    let mut search = Maximizer {
        ctx,
        best: lexicode,
    };
    let status = match search.extend(0) {
        ControlFlow::Continue(()) => MaximumStatus::Proven,
        ControlFlow::Break(Halt::NodeLimit) => MaximumStatus::NodeLimit,
        ControlFlow::Break(Halt::Failed(err)) => return Err(err),
    };
    let statistics = search.ctx.statistics();
    info!(
        size = search.best.len(),
        ?status,
        nodes = statistics.nodes,
        "maximization finished"
    );
    Ok(MaximumOutcome {
        params: *tables.params(),
        status,
        lexicode_size,
        code: search.best,
        statistics,
    })
}

/// Finds the maximum by asking [`decide`] for one more word at a time,
/// starting just above the lexicode size.
///
/// The node budget, if any, is shared by all probes.
pub fn maximize_by_decision(
    tables: &SearchTables,
    config: &SearchConfig,
) -> Result<MaximumOutcome, AmaxError> {
    config.validate()?;
    let mut probe_config = config.exact();
    let lexicode = SearchContext::new(tables, &probe_config, 1)?.lexicode();
    let lexicode_size = lexicode.len();
    let mut best = lexicode;
    let mut statistics = SearchStatistics::default();
    let status = loop {
        if let Some(limit) = config.max_nodes {
            let remaining = limit.saturating_sub(statistics.nodes);
            if remaining == 0 {
                break MaximumStatus::NodeLimit;
            }
            probe_config.max_nodes = Some(remaining);
        }
        let outcome = decide(tables, &probe_config, best.len() + 1)?;
        statistics.absorb(&outcome.statistics);
        match outcome.status {
            SearchStatus::Found => {
                debug!(size = outcome.code.len(), "probe succeeded");
                best = outcome.code;
            }
            SearchStatus::Exhausted => break MaximumStatus::Proven,
            SearchStatus::NodeLimit => break MaximumStatus::NodeLimit,
        }
    };
    info!(size = best.len(), ?status, nodes = statistics.nodes, "probing finished");
    Ok(MaximumOutcome {
        params: *tables.params(),
        status,
        lexicode_size,
        code: best,
        statistics,
    })
}

struct Maximizer<'a> {
    ctx: SearchContext<'a>,
    best: Vec<usize>,
}

impl Maximizer<'_> {
    fn extend(&mut self, level: usize) -> ControlFlow<Halt> {
        for position in 0..self.ctx.candidate_count(level) {
            let word = self.ctx.candidate(level, position);
            match self.ctx.enter(level, word) {
                ControlFlow::Break(halt) => return ControlFlow::Break(halt),
                ControlFlow::Continue(false) => continue,
                ControlFlow::Continue(true) => {}
            }
            if level + 1 > self.best.len() {
                self.best = self.ctx.code().to_vec();
                debug!(size = self.best.len(), "improved code");
            }
            let child_len = match self.ctx.expand(level, position, word) {
                Ok(len) => len,
                Err(halt) => return ControlFlow::Break(halt),
            };
            if !self.ctx.worth_descending(level, child_len, self.best.len() + 1) {
                continue;
            }
            if let ControlFlow::Break(halt) = self.extend(level + 1) {
                return ControlFlow::Break(halt);
            }
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amax_core::CodeParams;

    fn tables(n: usize, q: u32, d: usize) -> SearchTables {
        SearchTables::build(&CodeParams::new(n, q, d).unwrap(), 1 << 12).unwrap()
    }

    #[test]
    fn lexicode_is_already_maximum_for_length_seven() {
        let outcome = maximize(&tables(7, 2, 3), &SearchConfig::default()).unwrap();
        assert!(outcome.is_proven());
        assert_eq!(outcome.lexicode_size, 16);
        assert_eq!(outcome.size(), 16);
    }

    #[test]
    fn search_improves_on_lexicode() {
        // The greedy ternary code of length 3 and distance 2 has 7 words.
        let tables = tables(3, 3, 2);
        let outcome = maximize(&tables, &SearchConfig::plain()).unwrap();
        assert!(outcome.is_proven());
        assert_eq!(outcome.lexicode_size, 7);
        assert_eq!(outcome.size(), 9);
    }

    #[test]
    fn both_strategies_agree() {
        let tables = tables(6, 2, 3);
        let config = SearchConfig::default();
        let direct = maximize(&tables, &config).unwrap();
        let probed = maximize_by_decision(&tables, &config).unwrap();
        assert_eq!(direct.size(), 8);
        assert_eq!(probed.size(), 8);
        assert!(probed.is_proven());
    }

    #[test]
    fn budget_is_shared_by_probes() {
        let config = SearchConfig {
            max_nodes: Some(5),
            ..SearchConfig::default()
        };
        let outcome = maximize_by_decision(&tables(8, 2, 3), &config).unwrap();
        assert_eq!(outcome.status, MaximumStatus::NodeLimit);
        assert!(outcome.statistics.nodes <= 5);
    }
}
