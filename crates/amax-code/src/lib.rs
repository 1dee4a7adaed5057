#![deny(missing_docs)]
#![doc = "Vector spaces, the pairwise distance table and code records for the AMAX search."]

/// Hamming distance and the packed distance-satisfaction table.
pub mod distance;
/// Canonical hashing of code words.
pub mod hash;
/// Greedy lexicode construction.
pub mod lexicode;
/// JSON and binary code records.
pub mod record;
/// Vector enumeration, weight ordering and formatting.
pub mod space;
/// Leading-coordinate flags used by the opt-in symmetry cut.
pub mod symmetry;
/// Direct verification of codes from raw vectors.
pub mod verify;

pub use distance::{hamming, DistanceTable};
pub use hash::canonical_code_hash;
pub use record::{from_bytes, from_json, to_bytes, to_json, CodeRecord};
pub use space::{format_symbols, parse_symbols, Symbol, VectorSpace};
pub use symmetry::SymmetryFilter;
pub use verify::{is_canonical, verify_code, verify_words, Verification};
