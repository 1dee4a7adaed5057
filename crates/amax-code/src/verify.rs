use amax_core::{AmaxError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::distance::hamming;
use crate::space::{Symbol, VectorSpace};

/// Result of a direct pairwise check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// Number of words checked.
    pub size: usize,
    /// Smallest pairwise distance, `None` for fewer than two words.
    pub min_distance: Option<usize>,
}

/// Recomputes every pairwise distance of `indices` from the raw vectors.
///
/// Does not consult a [`crate::DistanceTable`].
pub fn verify_code(
    space: &VectorSpace,
    indices: &[usize],
    min_distance: usize,
) -> Result<Verification, AmaxError> {
    if let Some(&bad) = indices.iter().find(|&&index| index >= space.len()) {
        return Err(AmaxError::Code(
            ErrorInfo::new("index-out-of-range", "code refers to a vector outside the space")
                .with_context("index", bad)
                .with_context("vectors", space.len()),
        ));
    }
    let words: Vec<&[Symbol]> = indices.iter().map(|&index| space.vector(index)).collect();
    check_pairs(&words, min_distance)
}

/// Verifies free-standing words against length, alphabet and distance.
pub fn verify_words(
    words: &[Vec<Symbol>],
    alphabet: u32,
    min_distance: usize,
) -> Result<Verification, AmaxError> {
    if let Some(first) = words.first() {
        for (position, word) in words.iter().enumerate() {
            if word.len() != first.len() {
                return Err(AmaxError::Code(
                    ErrorInfo::new("length-mismatch", "code words have different lengths")
                        .with_context("position", position)
                        .with_context("expected", first.len())
                        .with_context("found", word.len()),
                ));
            }
            if let Some(&symbol) = word.iter().find(|&&symbol| symbol >= alphabet) {
                return Err(AmaxError::Code(
                    ErrorInfo::new("symbol-out-of-range", "word uses a symbol outside the alphabet")
                        .with_context("position", position)
                        .with_context("symbol", symbol)
                        .with_context("q", alphabet),
                ));
            }
        }
    }
    let borrowed: Vec<&[Symbol]> = words.iter().map(Vec::as_slice).collect();
    check_pairs(&borrowed, min_distance)
}

fn check_pairs(words: &[&[Symbol]], min_distance: usize) -> Result<Verification, AmaxError> {
    let mut smallest: Option<usize> = None;
    for (i, a) in words.iter().enumerate() {
        for (j, b) in words.iter().enumerate().skip(i + 1) {
            let distance = hamming(a, b);
            if distance < min_distance {
                return Err(AmaxError::Code(
                    ErrorInfo::new("pair-too-close", "two code words are closer than d")
                        .with_context("first", i)
                        .with_context("second", j)
                        .with_context("distance", distance)
                        .with_context("d", min_distance),
                ));
            }
            smallest = Some(smallest.map_or(distance, |s| s.min(distance)));
        }
    }
    Ok(Verification {
        size: words.len(),
        min_distance: smallest,
    })
}

/// True iff `indices` is strictly increasing.
pub fn is_canonical(indices: &[usize]) -> bool {
    indices.windows(2).all(|pair| pair[0] < pair[1])
}
