use amax_core::{AmaxError, CodeParams, ErrorInfo, RunProvenance, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::hash::canonical_code_hash;
use crate::space::{Symbol, VectorSpace};
use crate::verify::{verify_words, Verification};

/// Schema version written into every [`CodeRecord`].
pub const RECORD_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serializable code together with its parameters and provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRecord {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Parameters the code was searched for.
    pub params: CodeParams,
    /// Code words, in search order.
    pub words: Vec<Vec<Symbol>>,
    /// Provenance of the record.
    pub provenance: RunProvenance,
}

impl CodeRecord {
    /// Builds a record from indices into `space`, filling in the code hash.
    pub fn from_indices(space: &VectorSpace, indices: &[usize], provenance: RunProvenance) -> Self {
        let words: Vec<Vec<Symbol>> = indices
            .iter()
            .map(|&index| space.vector(index).to_vec())
            .collect();
        let mut provenance = provenance;
        provenance.code_hash = canonical_code_hash(space.params(), &words);
        Self {
            schema_version: RECORD_SCHEMA,
            params: *space.params(),
            words,
            provenance,
        }
    }

    /// Number of code words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the record holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks the words against the recorded parameters and hash.
    pub fn verify(&self) -> Result<Verification, AmaxError> {
        if let Some(word) = self.words.iter().find(|w| w.len() != self.params.length()) {
            return Err(AmaxError::Code(
                ErrorInfo::new("length-mismatch", "word length differs from n")
                    .with_context("expected", self.params.length())
                    .with_context("found", word.len()),
            ));
        }
        let report = verify_words(&self.words, self.params.alphabet(), self.params.min_distance())?;
        let expected = canonical_code_hash(&self.params, &self.words);
        if !self.provenance.code_hash.is_empty() && self.provenance.code_hash != expected {
            return Err(AmaxError::Code(
                ErrorInfo::new("hash-mismatch", "recorded code hash does not match the words")
                    .with_context("recorded", &self.provenance.code_hash)
                    .with_context("computed", expected),
            ));
        }
        Ok(report)
    }
}

/// Serializes a record to pretty JSON.
pub fn to_json(record: &CodeRecord) -> Result<String, AmaxError> {
    serde_json::to_string_pretty(record)
        .map_err(|err| AmaxError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a record from JSON.
pub fn from_json(data: &str) -> Result<CodeRecord, AmaxError> {
    serde_json::from_str(data)
        .map_err(|err| AmaxError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))
}

/// Serializes a record into a binary blob.
pub fn to_bytes(record: &CodeRecord) -> Result<Vec<u8>, AmaxError> {
    bincode::serialize(record)
        .map_err(|err| AmaxError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates a record from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<CodeRecord, AmaxError> {
    bincode::deserialize(bytes)
        .map_err(|err| AmaxError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))
}
