#![deny(missing_docs)]
#![doc = "Core parameters, provenance descriptors and the error taxonomy shared by the AMAX crates."]

pub mod errors;
pub mod params;
pub mod provenance;

pub use errors::{AmaxError, ErrorInfo};
pub use params::{validate_target, CodeParams, DEFAULT_ALPHABET, DEFAULT_MAX_VECTORS};
pub use provenance::{RunProvenance, SchemaVersion};
