//! Heuristic for entities with too few samples to fit a line.

use pulse_core::constants::{
    PERCENT_LIKE_MAX, PERCENT_LIKE_MIN, SINGLE_POINT_GREEN_CEILING_PCT,
    SINGLE_POINT_RED_FLOOR_PCT,
};
use pulse_core::AlertThresholds;

use super::types::{AlertDecision, AlertKind};

/// Classify a lone value. Only values within `[0, 100]` are treated as
/// percentages; anything else (absolute counts, kilograms) never alerts.
pub fn classify_single_point(value: f64, thresholds: &AlertThresholds) -> Option<AlertDecision> {
    if !(PERCENT_LIKE_MIN..=PERCENT_LIKE_MAX).contains(&value) {
        return None;
    }
    let red_cutoff = red_cutoff(thresholds);
    if value >= red_cutoff {
        return Some(AlertDecision {
            kind: AlertKind::Red,
            reason: format!("single_point_percent >= {red_cutoff}%"),
        });
    }
    let green_cutoff = green_cutoff(thresholds);
    if value <= green_cutoff {
        return Some(AlertDecision {
            kind: AlertKind::Green,
            reason: format!("single_point_percent <= {green_cutoff}%"),
        });
    }
    None
}

fn red_cutoff(thresholds: &AlertThresholds) -> f64 {
    SINGLE_POINT_RED_FLOOR_PCT.max(thresholds.increase_threshold * 100.0)
}

fn green_cutoff(thresholds: &AlertThresholds) -> f64 {
    SINGLE_POINT_GREEN_CEILING_PCT.min(thresholds.decrease_threshold.abs() * 100.0)
}

/// Dashboard message for a single-point alert.
pub fn single_point_text(kind: AlertKind, entity: &str, metric_words: &str, value: f64) -> String {
    match kind {
        AlertKind::Red => format!(
            "🔴 ALERT: **{entity}** has a high {metric_words} of {value}%. Needs attention."
        ),
        AlertKind::Green => format!(
            "🟢 TREND: **{entity}** shows a low {metric_words} of {value}%. Good performance."
        ),
    }
}
