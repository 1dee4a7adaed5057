use std::error::Error;
use std::path::PathBuf;

use amax_search::decide;
use clap::Args;
use tracing::info;

use super::{build_tables, ParamArgs, SearchArgs};
use crate::report::{timed, to_canonical_json_bytes, RunReport};
use crate::write_json;

#[derive(Args, Debug)]
pub struct DecideArgs {
    #[command(flatten)]
    pub params: ParamArgs,
    /// Promised code size.
    #[arg(long)]
    pub m: usize,
    #[command(flatten)]
    pub search: SearchArgs,
    /// Print the report as canonical JSON instead of text.
    #[arg(long)]
    pub json: bool,
    /// Write the JSON report to this file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &DecideArgs) -> Result<(), Box<dyn Error>> {
    let params = args.params.params()?;
    let config = args.search.resolve()?;
    let tables = build_tables(&params, &config)?;
    let (outcome, elapsed) = timed(|| decide(&tables, &config, args.m));
    let outcome = outcome.map_err(|err| Box::new(err) as Box<dyn Error>)?;
    let report = RunReport::from_decision(&tables, &config, &outcome, elapsed)
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
