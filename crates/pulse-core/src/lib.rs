//! # pulse-core
//!
//! Foundation crate for the Pulse analytics engine.
//! Defines periods, raw records, metric sources, thresholds, errors, config,
//! tracing, and constants. `pulse-analytics` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PulseConfig;
pub use errors::{ConfigError, PeriodError, PulseErrorCode};
pub use types::{
    AlertThresholds, ForecastOptions, Period, RawRecord, RecordBatch, SourceId, SourceSnapshot,
};
