//! Trend aggregation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TREND_MONTHS, DEFAULT_TREND_TOP};

/// Configuration for trend windows and rankings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrendConfig {
    /// Look-back window when a request names none. Default: 6.
    pub default_months: Option<u32>,
    /// Entities kept by ranking views when a request names none. Default: 5.
    pub default_top: Option<usize>,
}

impl TrendConfig {
    pub fn effective_default_months(&self) -> u32 {
        self.default_months.unwrap_or(DEFAULT_TREND_MONTHS)
    }

    pub fn effective_default_top(&self) -> usize {
        self.default_top.unwrap_or(DEFAULT_TREND_TOP)
    }
}
