//! Validated code parameters.

use serde::{Deserialize, Serialize};

use crate::errors::{AmaxError, ErrorInfo};

/// Default alphabet size (binary codes).
pub const DEFAULT_ALPHABET: u32 = 2;

/// Default ceiling on the number of vectors for which a distance table is built.
///
/// The table holds `V * V` bits, so `1 << 15` vectors cost 128 MiB.
pub const DEFAULT_MAX_VECTORS: usize = 1 << 15;

/// Length, alphabet size and minimum distance of the codes being searched.
///
/// Values are only obtainable through [`CodeParams::new`], which rejects
/// anything the search cannot honour instead of clamping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCodeParams", into = "RawCodeParams")]
pub struct CodeParams {
    length: usize,
    alphabet: u32,
    min_distance: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawCodeParams {
    n: usize,
    #[serde(default = "default_alphabet")]
    q: u32,
    d: usize,
}

fn default_alphabet() -> u32 {
    DEFAULT_ALPHABET
}

impl TryFrom<RawCodeParams> for CodeParams {
    type Error = AmaxError;

    fn try_from(raw: RawCodeParams) -> Result<Self, Self::Error> {
        CodeParams::new(raw.n, raw.q, raw.d)
    }
}

impl From<CodeParams> for RawCodeParams {
    fn from(params: CodeParams) -> Self {
        RawCodeParams {
            n: params.length,
            q: params.alphabet,
            d: params.min_distance,
        }
    }
}

impl CodeParams {
    /// Validates and creates a parameter set.
    pub fn new(length: usize, alphabet: u32, min_distance: usize) -> Result<Self, AmaxError> {
        if length == 0 {
            return Err(AmaxError::Parameter(
                ErrorInfo::new("length-zero", "vector length must be positive")
                    .with_context("n", length),
            ));
        }
        if alphabet < 2 {
            return Err(AmaxError::Parameter(
                ErrorInfo::new("alphabet-too-small", "alphabet must contain at least two symbols")
                    .with_context("q", alphabet),
            ));
        }
        if min_distance == 0 || min_distance > length {
            return Err(AmaxError::Parameter(
                ErrorInfo::new("distance-out-of-range", "minimum distance must satisfy 1 <= d <= n")
                    .with_context("d", min_distance)
                    .with_context("n", length),
            ));
        }
        Ok(Self {
            length,
            alphabet,
            min_distance,
        })
    }

    /// Binary parameters, `q = 2`.
    pub fn binary(length: usize, min_distance: usize) -> Result<Self, AmaxError> {
        Self::new(length, DEFAULT_ALPHABET, min_distance)
    }

    /// Vector length `n`.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Alphabet size `q`.
    pub fn alphabet(&self) -> u32 {
        self.alphabet
    }

    /// Minimum pairwise Hamming distance `d`.
    pub fn min_distance(&self) -> usize {
        self.min_distance
    }

    /// Returns `q^n`, or `None` when it does not fit in `usize`.
    pub fn space_size(&self) -> Option<usize> {
        let exponent = u32::try_from(self.length).ok()?;
        (self.alphabet as usize).checked_pow(exponent)
    }

    /// Returns `q^n` if it is at most `max_vectors`.
    pub fn checked_space_size(&self, max_vectors: usize) -> Result<usize, AmaxError> {
        match self.space_size() {
            Some(size) if size <= max_vectors => Ok(size),
            size => Err(AmaxError::Parameter(
                ErrorInfo::new("space-too-large", "q^n exceeds the distance table limit")
                    .with_context("n", self.length)
                    .with_context("q", self.alphabet)
                    .with_context(
                        "vectors",
                        size.map_or_else(|| "overflow".to_string(), |s| s.to_string()),
                    )
                    .with_context("max_vectors", max_vectors)
                    .with_hint("raise max_vectors or shorten the code"),
            )),
        }
    }
}

/// Validates a promised code size.
pub fn validate_target(promised: usize) -> Result<usize, AmaxError> {
    if promised == 0 {
        return Err(AmaxError::Parameter(
            ErrorInfo::new("target-zero", "promised code size must be positive")
                .with_context("promised_m", promised),
        ));
    }
    Ok(promised)
}
