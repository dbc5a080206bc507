//! Trend request and result types.

use pulse_core::config::TrendConfig;
use pulse_core::Period;
use serde::{Deserialize, Serialize};

use super::catalog::MetricUnit;

/// Which months a trend covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PeriodSelection {
    /// Every month from `from` to `to`, inclusive.
    Range { from: Period, to: Period },
    /// The last `months` months ending at the latest period seen in any source.
    LastMonths { months: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRequest {
    pub metric: String,
    pub selection: PeriodSelection,
    /// Keep only the top-K series by total.
    #[serde(default)]
    pub top: Option<usize>,
    /// Extra entities to include even if no source mentions them.
    #[serde(default)]
    pub entities: Vec<String>,
}

impl TrendRequest {
    pub fn last_months(metric: impl Into<String>, months: u32) -> Self {
        Self {
            metric: metric.into(),
            selection: PeriodSelection::LastMonths { months },
            top: None,
            entities: Vec::new(),
        }
    }

    pub fn range(metric: impl Into<String>, from: Period, to: Period) -> Self {
        Self {
            metric: metric.into(),
            selection: PeriodSelection::Range { from, to },
            top: None,
            entities: Vec::new(),
        }
    }

    /// Last-N request using the configured default window and top-K.
    pub fn from_config(metric: impl Into<String>, config: &TrendConfig) -> Self {
        Self::last_months(metric, config.effective_default_months())
            .with_top(config.effective_default_top())
    }

    pub fn with_top(mut self, top: usize) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_entities<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entities = entities.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub entity: String,
    /// One value per period of the result; unresolved periods are 0.
    pub values: Vec<f64>,
    pub total: f64,
}

impl TrendSeries {
    /// Percent change between the last two values.
    ///
    /// A zero previous value yields 0 when the last value is also 0 and 100
    /// otherwise. `None` with fewer than two values.
    pub fn last_step_change_pct(&self) -> Option<f64> {
        let [.., prev, last] = self.values.as_slice() else {
            return None;
        };
        Some(if *prev == 0.0 {
            if *last == 0.0 {
                0.0
            } else {
                100.0
            }
        } else {
            (last - prev) / prev.abs() * 100.0
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub metric: String,
    pub periods: Vec<Period>,
    /// Sorted by total descending; ties in entity name order.
    pub series: Vec<TrendSeries>,
    pub unit: MetricUnit,
    pub warnings: Vec<String>,
}

impl TrendResult {
    pub fn series_for(&self, entity: &str) -> Option<&TrendSeries> {
        self.series.iter().find(|s| s.entity == entity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntity {
    pub entity: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub entity: String,
    pub value: f64,
}

/// Every entity's value in the most recent period of a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub metric: String,
    /// `None` when the metric's sources hold no dated records.
    pub period: Option<Period>,
    pub unit: MetricUnit,
    pub entries: Vec<LeaderboardEntry>,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> TrendSeries {
        TrendSeries {
            entity: "X".into(),
            values: values.to_vec(),
            total: values.iter().sum(),
        }
    }

    #[test]
    fn test_last_step_change() {
        assert_eq!(series(&[4.0, 5.0]).last_step_change_pct(), Some(25.0));
        assert_eq!(series(&[1.0, -2.0, 1.0]).last_step_change_pct(), Some(150.0));
        assert_eq!(series(&[0.0, 3.0]).last_step_change_pct(), Some(100.0));
        assert_eq!(series(&[0.0, 0.0]).last_step_change_pct(), Some(0.0));
        assert_eq!(series(&[3.0]).last_step_change_pct(), None);
    }

    #[test]
    fn test_selection_serde_shape() {
        let json = serde_json::to_value(PeriodSelection::LastMonths { months: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "lastMonths", "months": 3}));
        let back: PeriodSelection = serde_json::from_value(json).unwrap();
        assert_eq!(back, PeriodSelection::LastMonths { months: 3 });
    }
}
