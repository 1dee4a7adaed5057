use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::iter::FromIterator;
use std::time::{Duration, Instant};

use amax_code::{format_symbols, CodeRecord};
use amax_core::{AmaxError, ErrorInfo, RunProvenance, SchemaVersion};
use amax_search::{
    MaximumOutcome, SearchConfig, SearchOutcome, SearchStatistics, SearchTables,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Schema version written into every [`RunReport`].
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Which engine produced a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RunMode {
    /// Decision search for a promised size.
    Decide {
        /// Target size.
        promised_m: usize,
    },
    /// Maximization.
    Maximize {
        /// `branch-and-bound` or `probe`.
        strategy: String,
        /// Size of the greedy starting code.
        lexicode_size: usize,
    },
}

/// Complete, serializable account of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Report schema.
    pub schema_version: SchemaVersion,
    /// Engine and its target.
    pub mode: RunMode,
    /// Configuration in force.
    pub config: SearchConfig,
    /// Terminal status, kebab-case.
    pub status: String,
    /// Whether the run reached its goal.
    pub success: bool,
    /// Indices of the reported code in the weight-sorted space.
    pub indices: Vec<usize>,
    /// Search counters.
    pub statistics: SearchStatistics,
    /// Wall-clock search time in microseconds.
    pub elapsed_us: u64,
    /// The code itself, with parameters and provenance.
    pub record: CodeRecord,
}

impl RunReport {
    /// Builds the report of a decision run.
    pub fn from_decision(
        tables: &SearchTables,
        config: &SearchConfig,
        outcome: &SearchOutcome,
        elapsed: Duration,
    ) -> Result<Self, AmaxError> {
        Ok(Self {
            schema_version: REPORT_SCHEMA,
            mode: RunMode::Decide {
                promised_m: outcome.promised_m,
            },
            config: config.clone(),
            status: status_label(&outcome.status)?,
            success: outcome.is_success(),
            indices: outcome.code.clone(),
            statistics: outcome.statistics,
            elapsed_us: micros(elapsed),
            record: CodeRecord::from_indices(tables.space(), &outcome.code, provenance(config)?),
        })
    }

    /// Builds the report of a maximization run.
    pub fn from_maximum(
        tables: &SearchTables,
        config: &SearchConfig,
        strategy: &str,
        outcome: &MaximumOutcome,
        elapsed: Duration,
    ) -> Result<Self, AmaxError> {
        Ok(Self {
            schema_version: REPORT_SCHEMA,
            mode: RunMode::Maximize {
                strategy: strategy.to_string(),
                lexicode_size: outcome.lexicode_size,
            },
            config: config.clone(),
            status: status_label(&outcome.status)?,
            success: outcome.is_proven(),
            indices: outcome.code.clone(),
            statistics: outcome.statistics,
            elapsed_us: micros(elapsed),
            record: CodeRecord::from_indices(tables.space(), &outcome.code, provenance(config)?),
        })
    }

    /// Human readable summary followed by one line per code word.
    pub fn render_text(&self) -> String {
        let params = &self.record.params;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "n={} q={} d={}",
            params.length(),
            params.alphabet(),
            params.min_distance()
        );
        match &self.mode {
            RunMode::Decide { promised_m } => {
                let _ = writeln!(out, "decide M={promised_m}: {}", self.status);
            }
            RunMode::Maximize {
                strategy,
                lexicode_size,
            } => {
                let _ = writeln!(
                    out,
                    "maximize ({strategy}, lexicode {lexicode_size}): {}",
                    self.status
                );
            }
        }
        let _ = writeln!(out, "size: {}", self.record.len());
        for (index, word) in self.indices.iter().zip(&self.record.words) {
            let _ = writeln!(out, "{index:>8}  {}", format_symbols(word, params.alphabet()));
        }
        let stats = &self.statistics;
        let _ = writeln!(
            out,
            "nodes: {} size-prunes: {} coloring-prunes: {} symmetry-cuts: {}",
            stats.nodes, stats.size_prunes, stats.coloring_prunes, stats.symmetry_cuts
        );
        let _ = writeln!(out, "elapsed: {:.3} ms", self.elapsed_us as f64 / 1000.0);
        let _ = write!(out, "code hash: {}", self.record.provenance.code_hash);
        out
    }
}

fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

fn status_label<T: Serialize>(status: &T) -> Result<String, AmaxError> {
    match serde_json::to_value(status).map_err(|err| serde_error("status-encode", err))? {
        Value::String(label) => Ok(label),
        other => Ok(other.to_string()),
    }
}

/// Runs `f` and measures how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Provenance for a run under `config`, stamped with the current time.
pub fn provenance(config: &SearchConfig) -> Result<RunProvenance, AmaxError> {
    Ok(RunProvenance {
        config_hash: config_hash(config)?,
        code_hash: String::new(),
        created_at: chrono::Utc::now().to_rfc3339(),
        tool_versions: BTreeMap::new(),
    }
    .with_tool("amax-sim", env!("CARGO_PKG_VERSION")))
}

/// SHA-256 of the canonical JSON form of `config`.
pub fn config_hash(config: &SearchConfig) -> Result<String, AmaxError> {
    let bytes = to_canonical_json_bytes(config)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

fn serde_error(code: &str, err: impl ToString) -> AmaxError {
    AmaxError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut ordered = BTreeMap::new();
            for (key, val) in map {
                ordered.insert(key, canonicalize(val));
            }
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into compact JSON with sorted object keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, AmaxError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonicalize(value))
        .map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}
