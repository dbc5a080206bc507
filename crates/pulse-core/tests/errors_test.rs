//! Error codes and display strings.

use pulse_core::errors::{ConfigError, PeriodError, PulseErrorCode};

#[test]
fn test_config_error_code_string() {
    let err = ConfigError::ValidationFailed {
        field: "forecast.min_points".to_string(),
        message: "must be at least 1".to_string(),
    };
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert_eq!(
        err.coded_string(),
        "[CONFIG_ERROR] Config validation failed for forecast.min_points: must be at least 1"
    );
}

#[test]
fn test_period_error_display() {
    let err = PeriodError::Malformed("2025/09".to_string());
    assert_eq!(err.to_string(), "Malformed period key '2025/09': expected YYYY-MM");
    assert_eq!(err.error_code(), "PERIOD_ERROR");
}
