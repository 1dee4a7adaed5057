use std::error::Error;
use std::path::PathBuf;

use amax_search::{maximize, maximize_by_decision};
use clap::{Args, ValueEnum};
use tracing::info;

use super::{build_tables, ParamArgs, SearchArgs};
use crate::report::{timed, to_canonical_json_bytes, RunReport};
use crate::write_json;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One branch-and-bound pass raising its target as codes improve.
    BranchAndBound,
    /// Repeated decision searches for one more word.
    Probe,
}

impl Strategy {
    fn label(self) -> &'static str {
        match self {
            Strategy::BranchAndBound => "branch-and-bound",
            Strategy::Probe => "probe",
        }
    }
}

#[derive(Args, Debug)]
pub struct MaximizeArgs {
    #[command(flatten)]
    pub params: ParamArgs,
    /// Maximization strategy.
    #[arg(long, value_enum, default_value_t = Strategy::BranchAndBound)]
    pub strategy: Strategy,
    #[command(flatten)]
    pub search: SearchArgs,
    /// Print the report as canonical JSON instead of text.
    #[arg(long)]
    pub json: bool,
    /// Write the JSON report to this file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &MaximizeArgs) -> Result<(), Box<dyn Error>> {
    let params = args.params.params()?;
    let config = args.search.resolve()?;
    let tables = build_tables(&params, &config)?;
    let (outcome, elapsed) = timed(|| match args.strategy {
        Strategy::BranchAndBound => maximize(&tables, &config),
        Strategy::Probe => maximize_by_decision(&tables, &config),
    });
    let outcome = outcome.map_err(|err| Box::new(err) as Box<dyn Error>)?;
    let report = RunReport::from_maximum(&tables, &config, args.strategy.label(), &outcome, elapsed)
        .map_err(|err| Box::new(err) as Box<dyn Error>)?;
    if let Some(path) = &args.out {
        write_json(path, &report)?;
        info!(path = %path.display(), "wrote run report");
    }
    if args.json {
        let json = to_canonical_json_bytes(&report).map_err(|err| Box::new(err) as Box<dyn Error>)?;
        println!("{}", String::from_utf8(json)?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}
