use std::error::Error;
use std::fs;
use std::path::PathBuf;

use amax_code::{from_json, CodeRecord};
use clap::Args;
use serde::Deserialize;

use crate::report::RunReport;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Code record or run report (JSON) to verify.
    #[arg(long)]
    pub input: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VerifyInput {
    Report(Box<RunReport>),
    Record(CodeRecord),
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(&args.input)?;
    let record = match serde_json::from_str::<VerifyInput>(&text) {
        Ok(VerifyInput::Report(report)) => report.record,
        Ok(VerifyInput::Record(record)) => record,
        Err(_) => from_json(&text).map_err(|err| Box::new(err) as Box<dyn Error>)?,
    };
    let verification = record.verify().map_err(|err| Box::new(err) as Box<dyn Error>)?;
    let min_distance = verification
        .min_distance
        .map_or_else(|| "-".to_string(), |d| d.to_string());
    println!(
        "verified {} words: n={} q={} d={} min distance {}",
        verification.size,
        record.params.length(),
        record.params.alphabet(),
        record.params.min_distance(),
        min_distance
    );
    Ok(())
}
