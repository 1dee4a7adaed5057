//! Structured error types shared across AMAX crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`AmaxError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (lengths, indices, limits, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the AMAX search.
///
/// Search exhaustion is never reported through this type: a search that ends
/// without reaching its target returns a regular outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum AmaxError {
    /// Rejected input parameters (length, alphabet, distance, target size).
    #[error("parameter error: {0}")]
    Parameter(ErrorInfo),
    /// Allocation of a table or search buffer failed.
    #[error("resource error: {0}")]
    Resource(ErrorInfo),
    /// A code violates its distance or shape contract.
    #[error("code error: {0}")]
    Code(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem access errors.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl AmaxError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            AmaxError::Parameter(info)
            | AmaxError::Resource(info)
            | AmaxError::Code(info)
            | AmaxError::Serde(info)
            | AmaxError::Io(info) => info,
        }
    }

    /// Shorthand for a parameter error with a code and message.
    pub fn parameter(code: &str, message: impl Into<String>) -> Self {
        AmaxError::Parameter(ErrorInfo::new(code, message))
    }
}

impl From<std::io::Error> for AmaxError {
    fn from(err: std::io::Error) -> Self {
        AmaxError::Io(ErrorInfo::new("io", err.to_string()).with_context("kind", err.kind()))
    }
}

impl From<std::collections::TryReserveError> for AmaxError {
    fn from(err: std::collections::TryReserveError) -> Self {
        AmaxError::Resource(
            ErrorInfo::new("allocation-failed", err.to_string())
                .with_hint("reduce the code length or alphabet size"),
        )
    }
}
