//! Backend health diagnostics.
//!
//! Explains why a submission ended the way it did by asking the backend how
//! its email transport is configured.

mod probe;
mod report;

pub use probe::HealthProbe;
pub use report::{HEALTH_UNREACHABLE, HealthReport};
