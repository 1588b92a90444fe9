//! # ecotrack-observability
//!
//! Structured tracing for the EcoTrack engine: subscriber setup, span
//! definitions, and assessment events.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_from_config, try_init_tracing_with_filter};
