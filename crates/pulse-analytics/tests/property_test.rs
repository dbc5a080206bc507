//! Property tests for regression, forecasting, and trend windows.

use proptest::prelude::*;
use pulse_analytics::regression::{fit, fit_sequential};
use pulse_analytics::{aggregate_trend, evaluate_forecast, TrendRequest};
use pulse_core::{ForecastOptions, Period, RawRecord, SourceId, SourceSnapshot};
use serde_json::json;

fn series_records(entity: &str, values: &[f64]) -> Vec<RawRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            json!({"district": entity, "year": 2020 + (i / 12) as i32, "month": i % 12 + 1, "m": v})
                .as_object()
                .cloned()
                .unwrap()
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_exact_line_recovered(slope in -50i32..50, intercept in -100i32..100, n in 2usize..24) {
        let points: Vec<(f64, f64)> = (1..=n)
            .map(|x| (x as f64, (slope * x as i32 + intercept) as f64))
            .collect();
        let model = fit(&points);
        prop_assert!((model.slope - slope as f64).abs() < 1e-9);
        prop_assert!((model.intercept - intercept as f64).abs() < 1e-7);
    }

    #[test]
    fn prop_projection_is_last_plus_slope(values in prop::collection::vec(1.0f64..1000.0, 2..20)) {
        let result = evaluate_forecast(&series_records("X", &values), "m", &ForecastOptions::default());
        let diag = result.diagnostic("X").unwrap();
        let last = *values.last().unwrap();
        let slope = diag.slope.unwrap();
        prop_assert_eq!(diag.last_value, Some(last));
        prop_assert_eq!(diag.projected_next_value, Some(last + slope));
        prop_assert_eq!(diag.projected_percent_change, Some(slope / last));
        prop_assert_eq!(slope, fit_sequential(&values).slope);
    }

    #[test]
    fn prop_constant_series_never_alerts(value in -500i32..500, n in 2usize..24) {
        let values = vec![value as f64; n];
        let result = evaluate_forecast(&series_records("X", &values), "m", &ForecastOptions::default());
        prop_assert!(result.alerts.is_empty());
    }

    #[test]
    fn prop_forecast_is_idempotent(values in prop::collection::vec(-100.0f64..100.0, 0..12)) {
        let records = series_records("X", &values);
        let options = ForecastOptions::default();
        prop_assert_eq!(
            evaluate_forecast(&records, "m", &options),
            evaluate_forecast(&records, "m", &options)
        );
    }

    #[test]
    fn prop_trend_window_shape(months in 1u32..30, count in 1usize..40) {
        let snapshot = SourceSnapshot::new()
            .with_source(SourceId::Nbw, series_records("X", &vec![1.0; count]))
            .with_source(SourceId::Firearms, series_records("Y", &vec![2.0; 3]));
        let request = TrendRequest::last_months("unmapped", months);
        let first = aggregate_trend(&snapshot, &request);
        prop_assert_eq!(first.periods.len(), months as usize);
        prop_assert!(first.periods.windows(2).all(|w| w[1] == w[0].succ()));
        let latest = Period::new(2020 + ((count - 1) / 12) as i32, ((count - 1) % 12 + 1) as u32).unwrap();
        let expected_end = latest.max(Period::new(2020, 3).unwrap());
        prop_assert_eq!(first.periods.last().copied(), Some(expected_end));
        for series in &first.series {
            prop_assert_eq!(series.values.len(), first.periods.len());
        }
        prop_assert_eq!(first, aggregate_trend(&snapshot, &request));
    }
}
