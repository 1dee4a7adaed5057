use std::error::Error;
use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    decide::{self, DecideArgs},
    maximize::{self, MaximizeArgs},
    table::{self, TableArgs},
    verify::{self, VerifyArgs},
    version::{self, VersionArgs},
};

mod commands;
mod report;

#[derive(Parser, Debug)]
#[command(name = "amax-sim", about = "Branch-and-bound search for maximum codes A_q(n, d)")]
struct Cli {
    /// Increase log verbosity (`-v` debug, `-vv` trace). `RUST_LOG` wins when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide whether a code of a promised size exists.
    Decide(DecideArgs),
    /// Find a maximum code.
    Maximize(MaximizeArgs),
    /// Inspect the distance table.
    Table(TableArgs),
    /// Verify a code record or run report by direct distance computation.
    Verify(VerifyArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Decide(args) => decide::run(&args),
        Command::Maximize(args) => maximize::run(&args),
        Command::Table(args) => table::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn write_json<P: AsRef<Path>, T: serde::Serialize>(path: P, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
