//! PulseErrorCode trait for host-facing error codes.

/// Every error enum implements this to provide a stable, structured
/// error code string for the host application.
pub trait PulseErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PERIOD_ERROR: &str = "PERIOD_ERROR";
