//! The forecast evaluation pass.

use pulse_core::tracing::metrics;
use pulse_core::{AlertThresholds, ForecastOptions, RawRecord, RecordBatch};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::single_point::{classify_single_point, single_point_text};
use super::types::{Alert, AlertDecision, AlertKind, ForecastDiagnostic, ForecastResult};
use crate::normalizer::{group_series, EntitySeries};
use crate::regression::fit_sequential;

const REASON_NO_DATA: &str = "no numeric data points for metric";
const REASON_SINGLE_POINT: &str = "single sample and not meeting single-point thresholds";
const REASON_UNSAFE_PERCENT: &str =
    "last value is zero or not finite; cannot compute percent change safely";
const REASON_BELOW_THRESHOLDS: &str = "regression result does not exceed thresholds";
const WARNING_EMPTY_INPUT: &str = "no records provided or empty collection";
const WARNING_VERBOSE: &str =
    "verbose diagnostics included; see diagnostics[entity] for per-entity details";

/// How one entity's evaluation ended, for summary tallying.
enum Outcome {
    Alerted(Alert),
    /// Evaluated, nothing crossed a threshold.
    Quiet,
    /// No data, or percent change unsafe to compute.
    Skipped,
}

/// Evaluate `metric` across every entity in `records`.
///
/// Never fails: malformed rows become warnings, degenerate series become
/// skip reasons. Thresholds left unset in `options` take compiled defaults.
pub fn evaluate_forecast(
    records: &[RawRecord],
    metric: &str,
    options: &ForecastOptions,
) -> ForecastResult {
    let mut result = ForecastResult::default();
    if records.is_empty() {
        warn!(metric, "forecast requested with no records");
        result.warnings.push(WARNING_EMPTY_INPUT.to_string());
        return result;
    }

    let thresholds = options.thresholds();
    let metric_words = metric.replace('_', " ");
    let series = group_series(records, metric);
    let mut red = Vec::new();
    let mut green = Vec::new();

    for entity_series in series {
        let (diagnostic, outcome) = evaluate_entity(&entity_series, metric, &metric_words, &thresholds);
        let summary = &mut result.summary;
        summary.total_entities += 1;
        match outcome {
            Outcome::Alerted(alert) => {
                summary.processed += 1;
                summary.alerts_by_type.record(alert.kind);
                match alert.kind {
                    AlertKind::Red => red.push(alert),
                    AlertKind::Green => green.push(alert),
                }
            }
            Outcome::Quiet => {
                summary.processed += 1;
                summary.skipped += 1;
            }
            Outcome::Skipped => summary.skipped += 1,
        }
        result.diagnostics.insert(entity_series.entity, diagnostic);
    }

    result.alerts = red;
    result.alerts.append(&mut green);
    result.summary.total_alerts = result.alerts.len();

    if options.verbose {
        result.warnings.push(WARNING_VERBOSE.to_string());
    }

    info!(
        metric,
        { metrics::FORECAST_ENTITIES } = result.summary.total_entities,
        { metrics::FORECAST_ALERTS } = result.summary.total_alerts,
        red = result.summary.alerts_by_type.red,
        green = result.summary.alerts_by_type.green,
        "forecast evaluated"
    );
    result
}

/// Evaluate an untyped JSON payload. A non-array payload is treated as empty
/// input; non-object elements are skipped. Extraction warnings are prepended
/// to the result's warnings.
pub fn evaluate_forecast_value(
    input: &Value,
    metric: &str,
    options: &ForecastOptions,
) -> ForecastResult {
    let batch = RecordBatch::from_value(input);
    let mut result = evaluate_forecast(&batch.records, metric, options);
    if !batch.warnings.is_empty() {
        let mut warnings = batch.warnings;
        warnings.append(&mut result.warnings);
        result.warnings = warnings;
    }
    result
}

fn evaluate_entity(
    series: &EntitySeries,
    metric: &str,
    metric_words: &str,
    thresholds: &AlertThresholds,
) -> (ForecastDiagnostic, Outcome) {
    let entity = series.entity.as_str();
    let values = series.values();
    let mut diagnostic = ForecastDiagnostic {
        sample_count: values.len(),
        warnings: series.warnings.clone(),
        ..Default::default()
    };

    let Some(&last_value) = values.last() else {
        debug!(entity, metric, "no numeric data points");
        diagnostic.reason_skipped = Some(REASON_NO_DATA.to_string());
        return (diagnostic, Outcome::Skipped);
    };

    if values.len() < thresholds.min_points {
        diagnostic.last_value = Some(last_value);
        return match classify_single_point(last_value, thresholds) {
            Some(decision) => {
                debug!(entity, metric, kind = %decision.kind, value = last_value, "single-point alert");
                let alert = Alert {
                    kind: decision.kind,
                    entity: entity.to_string(),
                    metric: metric.to_string(),
                    slope: None,
                    last_value,
                    projected_next_value: None,
                    projected_percent_change: None,
                    text: single_point_text(decision.kind, entity, metric_words, last_value),
                };
                diagnostic.alert = Some(decision);
                (diagnostic, Outcome::Alerted(alert))
            }
            None => {
                diagnostic.reason_skipped = Some(REASON_SINGLE_POINT.to_string());
                (diagnostic, Outcome::Quiet)
            }
        };
    }

    let model = fit_sequential(&values);
    diagnostic.slope = Some(model.slope);
    diagnostic.intercept = Some(model.intercept);
    diagnostic.last_value = Some(last_value);

    if last_value == 0.0 || !last_value.is_finite() {
        debug!(entity, metric, "last value unusable for percent change");
        diagnostic.reason_skipped = Some(REASON_UNSAFE_PERCENT.to_string());
        return (diagnostic, Outcome::Skipped);
    }

    let projected_next = last_value + model.slope;
    let percent_change = model.slope / last_value;
    diagnostic.projected_next_value = Some(projected_next);
    diagnostic.projected_percent_change = Some(percent_change);

    let decision = if model.slope > 0.0 && percent_change > thresholds.increase_threshold {
        Some(AlertDecision {
            kind: AlertKind::Red,
            reason: format!(
                "slope>0 and projectedPercentChange>{}",
                thresholds.increase_threshold
            ),
        })
    } else if model.slope < 0.0 && percent_change < thresholds.decrease_threshold {
        Some(AlertDecision {
            kind: AlertKind::Green,
            reason: format!(
                "slope<0 and projectedPercentChange<{}",
                thresholds.decrease_threshold
            ),
        })
    } else {
        None
    };

    let Some(decision) = decision else {
        diagnostic.reason_skipped = Some(REASON_BELOW_THRESHOLDS.to_string());
        return (diagnostic, Outcome::Quiet);
    };

    debug!(
        entity,
        metric,
        kind = %decision.kind,
        slope = model.slope,
        pct = percent_change,
        "projection alert"
    );
    let alert = Alert {
        kind: decision.kind,
        entity: entity.to_string(),
        metric: metric.to_string(),
        slope: Some(model.slope),
        last_value,
        projected_next_value: Some(projected_next),
        projected_percent_change: Some(percent_change),
        text: projection_text(decision.kind, entity, metric_words, percent_change, projected_next, last_value),
    };
    diagnostic.alert = Some(decision);
    (diagnostic, Outcome::Alerted(alert))
}

fn projection_text(
    kind: AlertKind,
    entity: &str,
    metric_words: &str,
    percent_change: f64,
    projected_next: f64,
    last_value: f64,
) -> String {
    // Whole percent, halves rounded away from zero.
    let pct = (percent_change * 100.0).abs().round();
    match kind {
        AlertKind::Red => format!(
            "🔴 ALERT: **{entity}**'s {metric_words} is forecast to rise by {pct:.0}% next month (proj: {projected_next:.2} from {last_value})."
        ),
        AlertKind::Green => format!(
            "🟢 TREND: **{entity}**'s {metric_words} is forecast to decrease by {pct:.0}% next month (proj: {projected_next:.2} from {last_value})."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(values: &[(&str, u32, f64)]) -> Vec<RawRecord> {
        values
            .iter()
            .map(|(entity, month, v)| {
                json!({"district": entity, "year": 2025, "month": month, "m": v})
                    .as_object()
                    .cloned()
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_rising_series_alerts_red() {
        let result = evaluate_forecast(
            &rows(&[("Puri", 1, 100.0), ("Puri", 2, 120.0), ("Puri", 3, 144.0)]),
            "m",
            &ForecastOptions::default(),
        );
        assert_eq!(result.alerts.len(), 1);
        let alert = &result.alerts[0];
        assert_eq!(alert.kind, AlertKind::Red);
        assert_eq!(alert.slope, Some(22.0));
        assert_eq!(alert.projected_next_value, Some(166.0));
        assert_eq!(
            alert.text,
            "🔴 ALERT: **Puri**'s m is forecast to rise by 15% next month (proj: 166.00 from 144)."
        );
        let diag = result.diagnostic("Puri").unwrap();
        assert_eq!(diag.alert.as_ref().unwrap().reason, "slope>0 and projectedPercentChange>0.1");
    }

    #[test]
    fn test_falling_series_alerts_green() {
        let result = evaluate_forecast(
            &rows(&[("Angul", 1, 50.0), ("Angul", 2, 40.0), ("Angul", 3, 30.0)]),
            "m",
            &ForecastOptions::default(),
        );
        let alert = &result.alerts[0];
        assert_eq!(alert.kind, AlertKind::Green);
        assert!(alert.text.starts_with("🟢 TREND: **Angul**'s m is forecast to decrease by 33%"));
    }

    #[test]
    fn test_alert_text_rounds_half_up() {
        let result = evaluate_forecast(
            &rows(&[("Jajpur", 1, 7.0), ("Jajpur", 2, 8.0)]),
            "m",
            &ForecastOptions::default(),
        );
        assert_eq!(
            result.alerts[0].text,
            "🔴 ALERT: **Jajpur**'s m is forecast to rise by 13% next month (proj: 9.00 from 8)."
        );
        assert_eq!(result.alerts[0].projected_percent_change, Some(0.125));
    }

    #[test]
    fn test_zero_last_value_skipped() {
        let result = evaluate_forecast(
            &rows(&[("Boudh", 1, 5.0), ("Boudh", 2, 0.0)]),
            "m",
            &ForecastOptions::default(),
        );
        let diag = result.diagnostic("Boudh").unwrap();
        assert_eq!(diag.reason_skipped.as_deref(), Some(REASON_UNSAFE_PERCENT));
        assert_eq!(diag.projected_percent_change, None);
        assert_eq!(result.summary.skipped, 1);
        assert_eq!(result.summary.processed, 0);
    }

    #[test]
    fn test_empty_input_warns() {
        let result = evaluate_forecast(&[], "m", &ForecastOptions::default());
        assert_eq!(result.warnings, vec![WARNING_EMPTY_INPUT.to_string()]);
        assert_eq!(result.summary.total_entities, 0);
    }
}
