//! Forecast configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DECREASE_THRESHOLD, DEFAULT_INCREASE_THRESHOLD, DEFAULT_MIN_POINTS};
use crate::types::{AlertThresholds, ForecastOptions};

/// Configuration for the forecast evaluator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForecastConfig {
    /// Projected fraction above which rising trends alert. Default: 0.10.
    pub increase_threshold: Option<f64>,
    /// Projected fraction below which falling trends alert. Default: -0.10.
    pub decrease_threshold: Option<f64>,
    /// Minimum samples for regression. Default: 2.
    pub min_points: Option<usize>,
    /// Attach the diagnostics hint warning to every result. Default: false.
    pub verbose: Option<bool>,
}

impl ForecastConfig {
    /// Returns the effective increase threshold, defaulting to 0.10.
    pub fn effective_increase_threshold(&self) -> f64 {
        self.increase_threshold.unwrap_or(DEFAULT_INCREASE_THRESHOLD)
    }

    /// Returns the effective decrease threshold, defaulting to -0.10.
    pub fn effective_decrease_threshold(&self) -> f64 {
        self.decrease_threshold.unwrap_or(DEFAULT_DECREASE_THRESHOLD)
    }

    /// Returns the effective minimum sample count, defaulting to 2.
    pub fn effective_min_points(&self) -> usize {
        self.min_points.unwrap_or(DEFAULT_MIN_POINTS)
    }

    pub fn thresholds(&self) -> AlertThresholds {
        AlertThresholds {
            increase_threshold: self.effective_increase_threshold(),
            decrease_threshold: self.effective_decrease_threshold(),
            min_points: self.effective_min_points(),
        }
    }

    /// Per-call options carrying this configuration.
    pub fn options(&self) -> ForecastOptions {
        ForecastOptions {
            increase_threshold: Some(self.effective_increase_threshold()),
            decrease_threshold: Some(self.effective_decrease_threshold()),
            min_points: Some(self.effective_min_points()),
            verbose: self.verbose.unwrap_or(false),
        }
    }
}
