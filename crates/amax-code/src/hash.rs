use amax_core::CodeParams;
use sha2::{Digest, Sha256};

use crate::space::Symbol;

/// Canonical structural hash of a code.
///
/// Words are hashed in sorted order, so the digest does not depend on the
/// order in which the search emitted them.
pub fn canonical_code_hash(params: &CodeParams, words: &[Vec<Symbol>]) -> String {
    let mut sorted: Vec<&Vec<Symbol>> = words.iter().collect();
    sorted.sort();

    let mut hasher = Sha256::new();
    hasher.update((params.length() as u64).to_le_bytes());
    hasher.update(u64::from(params.alphabet()).to_le_bytes());
    hasher.update((params.min_distance() as u64).to_le_bytes());
    hasher.update((sorted.len() as u64).to_le_bytes());
    for word in sorted {
        for &symbol in word {
            hasher.update(symbol.to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}
