//! Error handling for Pulse.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Analytics entry points never return these: malformed input and degenerate
//! computations are recovered into warnings and skip reasons. Errors surface
//! only from strict parsing and configuration loading.

pub mod config_error;
pub mod error_code;
pub mod period_error;

pub use config_error::ConfigError;
pub use error_code::PulseErrorCode;
pub use period_error::PeriodError;
