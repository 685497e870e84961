//! Per-turn world facts.
//!
//! Everything here is read-only once built. Wire tokens are mapped onto closed
//! enums at construction and an unknown token rejects the whole snapshot.

pub mod snapshot;
pub mod types;

pub use snapshot::{PlayerState, RawPlayer, RawSample, RawTurn, WorldSnapshot};
pub use types::{Location, Ownership, ResourceKind, ResourceVector, Sample, SampleId, NUM_RESOURCES};
