//! Forecast output types. Serialized camelCase for host consumption.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Alert severity. `Red` orders before `Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Worsening trend or high value; needs attention.
    Red,
    /// Improving trend or low value.
    Green,
}

impl AlertKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub entity: String,
    pub metric: String,
    /// Absent for single-point alerts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
    pub last_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected_next_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected_percent_change: Option<f64>,
    /// Human-readable message for the dashboard.
    pub text: String,
}

/// The alert recorded in a diagnostic, with the rule that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDecision {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub reason: String,
}

/// Per-entity record of what the evaluator saw and decided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDiagnostic {
    pub sample_count: usize,
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
    pub last_value: Option<f64>,
    pub projected_next_value: Option<f64>,
    pub projected_percent_change: Option<f64>,
    pub alert: Option<AlertDecision>,
    pub reason_skipped: Option<String>,
    /// Non-numeric values and unparseable dates found in this entity's rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertCounts {
    pub red: usize,
    pub green: usize,
}

impl AlertCounts {
    pub(crate) fn record(&mut self, kind: AlertKind) {
        match kind {
            AlertKind::Red => self.red += 1,
            AlertKind::Green => self.green += 1,
        }
    }
}

/// Run totals. An entity evaluated without an alert counts as both
/// processed and skipped, so `processed + skipped` may exceed
/// `total_entities`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub processed: usize,
    pub skipped: usize,
    pub alerts_by_type: AlertCounts,
    pub total_entities: usize,
    pub total_alerts: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// RED alerts first, then GREEN; each group in entity first-appearance order.
    pub alerts: Vec<Alert>,
    /// Keyed by entity name.
    pub diagnostics: BTreeMap<String, ForecastDiagnostic>,
    pub summary: ForecastSummary,
    pub warnings: Vec<String>,
}

impl ForecastResult {
    pub fn alerts_of(&self, kind: AlertKind) -> impl Iterator<Item = &Alert> + '_ {
        self.alerts.iter().filter(move |a| a.kind == kind)
    }

    pub fn diagnostic(&self, entity: &str) -> Option<&ForecastDiagnostic> {
        self.diagnostics.get(entity)
    }
}
