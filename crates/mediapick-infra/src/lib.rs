//! Mediapick Infrastructure Library
//!
//! Shared process-level setup: tracing subscriber initialization.

pub mod telemetry;

pub use telemetry::{init_telemetry, shutdown_telemetry, DEFAULT_FILTER};
