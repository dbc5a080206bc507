//! Period parsing errors.

use super::error_code::{self, PulseErrorCode};

/// Errors raised by strict `Period` construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    #[error("Malformed period key '{0}': expected YYYY-MM")]
    Malformed(String),

    #[error("Month {month} out of range for year {year}: expected 1-12")]
    MonthOutOfRange { year: i32, month: u32 },

    #[error("Year {0} out of range: expected 1-9999")]
    YearOutOfRange(i32),
}

impl PulseErrorCode for PeriodError {
    fn error_code(&self) -> &'static str {
        error_code::PERIOD_ERROR
    }
}
