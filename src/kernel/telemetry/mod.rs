//! Decision telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside the policy. It exists solely for
//! observability and for asserting on behaviour in tests.

pub mod event;
pub mod metrics;
pub mod recorder;
