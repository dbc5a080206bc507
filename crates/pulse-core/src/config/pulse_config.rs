//! Top-level Pulse configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ForecastConfig, TrendConfig};
use crate::constants::MAX_TREND_MONTHS;
use crate::errors::{ConfigError, PulseErrorCode};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`PULSE_*`)
/// 3. Project config (`pulse.toml` in the project root)
/// 4. User config (`~/.pulse/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PulseConfig {
    pub forecast: ForecastConfig,
    pub trend: TrendConfig,
}

/// Host-supplied overrides applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub increase_threshold: Option<f64>,
    pub decrease_threshold: Option<f64>,
    pub min_points: Option<usize>,
    pub trend_default_months: Option<u32>,
}

impl PulseConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("pulse.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &PulseConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.forecast.increase_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "forecast.increase_threshold".to_string(),
                    message: "must be a finite fraction >= 0.0".to_string(),
                });
            }
        }
        if let Some(threshold) = config.forecast.decrease_threshold {
            if !threshold.is_finite() || threshold > 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "forecast.decrease_threshold".to_string(),
                    message: "must be a finite fraction <= 0.0".to_string(),
                });
            }
        }
        if config.forecast.min_points == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "forecast.min_points".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(months) = config.trend.default_months {
            if months == 0 || months > MAX_TREND_MONTHS {
                return Err(ConfigError::ValidationFailed {
                    field: "trend.default_months".to_string(),
                    message: format!("must be between 1 and {MAX_TREND_MONTHS}"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.pulse/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".pulse").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut PulseConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PulseConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut PulseConfig, other: &PulseConfig) {
        // Forecast
        if other.forecast.increase_threshold.is_some() {
            base.forecast.increase_threshold = other.forecast.increase_threshold;
        }
        if other.forecast.decrease_threshold.is_some() {
            base.forecast.decrease_threshold = other.forecast.decrease_threshold;
        }
        if other.forecast.min_points.is_some() {
            base.forecast.min_points = other.forecast.min_points;
        }
        if other.forecast.verbose.is_some() {
            base.forecast.verbose = other.forecast.verbose;
        }

        // Trend
        if other.trend.default_months.is_some() {
            base.trend.default_months = other.trend.default_months;
        }
        if other.trend.default_top.is_some() {
            base.trend.default_top = other.trend.default_top;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PULSE_FORECAST_MIN_POINTS`, `PULSE_TREND_DEFAULT_MONTHS`, etc.
    /// Unparseable values are logged as `InvalidValue` and ignored.
    fn apply_env_overrides(config: &mut PulseConfig) {
        if let Some(v) = env_parse::<f64>("PULSE_FORECAST_INCREASE_THRESHOLD") {
            config.forecast.increase_threshold = Some(v);
        }
        if let Some(v) = env_parse::<f64>("PULSE_FORECAST_DECREASE_THRESHOLD") {
            config.forecast.decrease_threshold = Some(v);
        }
        if let Some(v) = env_parse::<usize>("PULSE_FORECAST_MIN_POINTS") {
            config.forecast.min_points = Some(v);
        }
        if let Some(v) = env_parse::<bool>("PULSE_FORECAST_VERBOSE") {
            config.forecast.verbose = Some(v);
        }
        if let Some(v) = env_parse::<u32>("PULSE_TREND_DEFAULT_MONTHS") {
            config.trend.default_months = Some(v);
        }
        if let Some(v) = env_parse::<usize>("PULSE_TREND_DEFAULT_TOP") {
            config.trend.default_top = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut PulseConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.increase_threshold {
            config.forecast.increase_threshold = Some(v);
        }
        if let Some(v) = overrides.decrease_threshold {
            config.forecast.decrease_threshold = Some(v);
        }
        if let Some(v) = overrides.min_points {
            config.forecast.min_points = Some(v);
        }
        if let Some(v) = overrides.trend_default_months {
            config.trend.default_months = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match parse_env_value(key, &raw) {
        Ok(value) => Some(value),
        Err(e) => {
            ::tracing::warn!(error = %e.coded_string(), "ignoring environment override");
            None
        }
    }
}

fn parse_env_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| ConfigError::InvalidValue {
        field: key.to_string(),
        message: format!("cannot parse '{trimmed}'"),
    })
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
