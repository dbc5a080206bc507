//! Alert thresholds and per-call forecast options.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DECREASE_THRESHOLD, DEFAULT_INCREASE_THRESHOLD, DEFAULT_MIN_POINTS};

/// Fully resolved thresholds for one forecast run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertThresholds {
    /// Projected fraction above which a rising trend is RED (e.g. 0.10).
    pub increase_threshold: f64,
    /// Projected fraction below which a falling trend is GREEN (e.g. -0.10).
    pub decrease_threshold: f64,
    /// Minimum samples before regression replaces the single-point heuristic.
    pub min_points: usize,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            increase_threshold: DEFAULT_INCREASE_THRESHOLD,
            decrease_threshold: DEFAULT_DECREASE_THRESHOLD,
            min_points: DEFAULT_MIN_POINTS,
        }
    }
}

/// Caller-supplied overrides. Unset fields fall back to compiled defaults
/// when resolved at the call boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForecastOptions {
    pub increase_threshold: Option<f64>,
    pub decrease_threshold: Option<f64>,
    pub min_points: Option<usize>,
    /// Add a hint warning pointing at the diagnostics map.
    pub verbose: bool,
}

impl ForecastOptions {
    /// Apply defaults to every unset threshold.
    pub fn thresholds(&self) -> AlertThresholds {
        let defaults = AlertThresholds::default();
        AlertThresholds {
            increase_threshold: self.increase_threshold.unwrap_or(defaults.increase_threshold),
            decrease_threshold: self.decrease_threshold.unwrap_or(defaults.decrease_threshold),
            min_points: self.min_points.unwrap_or(defaults.min_points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_options_resolve_to_defaults() {
        assert_eq!(ForecastOptions::default().thresholds(), AlertThresholds::default());
    }

    #[test]
    fn test_partial_override() {
        let options = ForecastOptions {
            increase_threshold: Some(0.25),
            ..Default::default()
        };
        let t = options.thresholds();
        assert_eq!(t.increase_threshold, 0.25);
        assert_eq!(t.decrease_threshold, DEFAULT_DECREASE_THRESHOLD);
        assert_eq!(t.min_points, DEFAULT_MIN_POINTS);
    }

    #[test]
    fn test_deserialize_camel_case_overrides() {
        let options: ForecastOptions =
            serde_json::from_str(r#"{"minPoints": 3, "verbose": true}"#).unwrap();
        assert_eq!(options.min_points, Some(3));
        assert!(options.verbose);
        assert_eq!(options.increase_threshold, None);
    }
}
