//! Observability for Pulse.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod metrics;
pub mod setup;

pub use setup::{build_filter, init_tracing};
