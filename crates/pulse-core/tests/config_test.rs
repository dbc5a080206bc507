//! Tests for the Pulse configuration system.

use std::sync::Mutex;

use pulse_core::config::{ConfigOverrides, PulseConfig};
use pulse_core::constants::{DEFAULT_INCREASE_THRESHOLD, DEFAULT_MIN_POINTS, DEFAULT_TREND_MONTHS};
use pulse_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all PULSE_ env vars to prevent cross-test contamination.
fn clear_pulse_env_vars() {
    for key in [
        "PULSE_FORECAST_INCREASE_THRESHOLD",
        "PULSE_FORECAST_DECREASE_THRESHOLD",
        "PULSE_FORECAST_MIN_POINTS",
        "PULSE_FORECAST_VERBOSE",
        "PULSE_TREND_DEFAULT_MONTHS",
        "PULSE_TREND_DEFAULT_TOP",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_pulse_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("pulse.toml"),
        r#"
[forecast]
increase_threshold = 0.2
min_points = 3

[trend]
default_months = 12
"#,
    )
    .unwrap();

    // Env overrides the project file for min_points
    std::env::set_var("PULSE_FORECAST_MIN_POINTS", "4");

    let overrides = ConfigOverrides {
        trend_default_months: Some(3),
        ..Default::default()
    };

    let config = PulseConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.forecast.increase_threshold, Some(0.2));
    assert_eq!(config.forecast.min_points, Some(4));
    assert_eq!(config.trend.default_months, Some(3));

    clear_pulse_env_vars();
}

#[test]
fn test_load_without_files_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_pulse_env_vars();

    let dir = tempdir();
    let config = PulseConfig::load(dir.path(), None).unwrap();

    assert_eq!(
        config.forecast.effective_increase_threshold(),
        DEFAULT_INCREASE_THRESHOLD
    );
    assert_eq!(config.forecast.effective_min_points(), DEFAULT_MIN_POINTS);
    assert_eq!(config.trend.effective_default_months(), DEFAULT_TREND_MONTHS);
}

#[test]
fn test_unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_pulse_env_vars();

    std::env::set_var("PULSE_FORECAST_INCREASE_THRESHOLD", "not-a-number");
    let dir = tempdir();
    let config = PulseConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.forecast.increase_threshold, None);

    clear_pulse_env_vars();
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_pulse_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("pulse.toml"), "[forecast\nmin_points = ").unwrap();
    let err = PulseConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_positive_decrease_threshold() {
    let err = PulseConfig::from_toml("[forecast]\ndecrease_threshold = 0.1\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "forecast.decrease_threshold")
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_out_of_range_counts() {
    assert!(PulseConfig::from_toml("[forecast]\nmin_points = 0\n").is_err());
    assert!(PulseConfig::from_toml("[trend]\ndefault_months = 0\n").is_err());
    assert!(PulseConfig::from_toml("[trend]\ndefault_months = 241\n").is_err());
    assert!(PulseConfig::from_toml("[trend]\ndefault_months = 240\n").is_ok());
}

#[test]
fn test_forecast_config_produces_call_options() {
    let config = PulseConfig::from_toml(
        "[forecast]\nincrease_threshold = 0.05\nverbose = true\n",
    )
    .unwrap();
    let options = config.forecast.options();
    assert_eq!(options.increase_threshold, Some(0.05));
    assert_eq!(options.min_points, Some(DEFAULT_MIN_POINTS));
    assert!(options.verbose);
    assert_eq!(options.thresholds(), config.forecast.thresholds());
}

#[test]
fn test_toml_roundtrip_keeps_values() {
    let config = PulseConfig::from_toml("[trend]\ndefault_top = 10\n").unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = PulseConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.trend.default_top, Some(10));
}
