use std::error::Error;
use std::path::PathBuf;

use amax_core::CodeParams;
use amax_search::{SearchConfig, SearchTables};
use clap::Args;
use tracing::debug;

pub mod decide;
pub mod maximize;
pub mod table;
pub mod verify;
pub mod version;

/// Code parameters shared by the search subcommands.
#[derive(Args, Debug, Clone)]
pub struct ParamArgs {
    /// Vector length.
    #[arg(long)]
    pub n: usize,
    /// Minimum pairwise Hamming distance.
    #[arg(long)]
    pub d: usize,
    /// Alphabet size.
    #[arg(long, default_value_t = 2)]
    pub q: u32,
}

impl ParamArgs {
    pub fn params(&self) -> Result<CodeParams, Box<dyn Error>> {
        CodeParams::new(self.n, self.q, self.d).map_err(|err| Box::new(err) as Box<dyn Error>)
    }
}

/// Search configuration file plus command line overrides.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// YAML search configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Enable the leading-coordinate short-circuit (may miss existing codes).
    #[arg(long)]
    pub symmetry_cut: bool,
    /// Disable origin, second-word and even-weight symmetry breaking.
    #[arg(long)]
    pub no_symmetry_breaking: bool,
    /// Disable the colouring bound.
    #[arg(long)]
    pub no_coloring: bool,
    /// Stop after this many nodes.
    #[arg(long)]
    pub max_nodes: Option<u64>,
    /// Refuse spaces with more vectors than this.
    #[arg(long)]
    pub max_vectors: Option<usize>,
}

impl SearchArgs {
    pub fn resolve(&self) -> Result<SearchConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path).map_err(|err| Box::new(err) as Box<dyn Error>)?,
            None => SearchConfig::default(),
        };
        if self.symmetry_cut {
            config.symmetry_cut = true;
        }
        if self.no_symmetry_breaking {
            config.fix_origin = false;
            config.fix_second_word = false;
            config.even_weight = false;
        }
        if self.no_coloring {
            config.coloring_bound = false;
        }
        if self.max_nodes.is_some() {
            config.max_nodes = self.max_nodes;
        }
        if let Some(limit) = self.max_vectors {
            config.max_vectors = limit;
        }
        config.validate().map_err(|err| Box::new(err) as Box<dyn Error>)?;
        debug!(?config, "resolved search configuration");
        Ok(config)
    }
}

pub fn build_tables(
    params: &CodeParams,
    config: &SearchConfig,
) -> Result<SearchTables, Box<dyn Error>> {
    SearchTables::build(params, config.max_vectors).map_err(|err| Box::new(err) as Box<dyn Error>)
}
