//! Telemetry for the tutor engine.
//!
//! Metrics stay in-process and are exposed as a snapshot over HTTP.

pub mod health;
pub mod metrics;
pub mod tracing_setup;

pub use health::*;
pub use metrics::*;
pub use tracing_setup::*;
