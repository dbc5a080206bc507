//! Trend aggregation over a source snapshot.

use pulse_core::tracing::metrics;
use pulse_core::{Period, SourceSnapshot};
use tracing::{debug, info, warn};

use super::catalog::ResolvedMetric;
use super::lookup::SnapshotIndex;
use super::types::{PeriodSelection, RankedEntity, TrendRequest, TrendResult, TrendSeries};
use super::window::build_period_list;

/// Build one series per entity for `request.metric` over the requested window.
///
/// Entities are the union of every source's entities plus the request
/// roster. Periods with no backing record contribute 0. Series are sorted by
/// total descending (ties in name order) and then truncated to `top`.
pub fn aggregate_trend(snapshot: &SourceSnapshot, request: &TrendRequest) -> TrendResult {
    let index = SnapshotIndex::build(snapshot);
    aggregate_with_index(&index, request)
}

pub(crate) fn aggregate_with_index(index: &SnapshotIndex<'_>, request: &TrendRequest) -> TrendResult {
    let metric = request.metric.as_str();
    let resolved = ResolvedMetric::resolve(metric);
    let mut warnings = Vec::new();

    let (periods, window_warning) = build_period_list(&request.selection, index.latest_period());
    if let Some(warning) = window_warning {
        warn!(metric, %warning, "trend window is empty");
        warnings.push(warning);
    }
    if let Some(warning) = coverage_warning(index, &resolved, metric) {
        warn!(metric, %warning, "trend metric has no backing data");
        warnings.push(warning);
    }
    if index.undated_count() > 0 {
        debug!(metric, undated = index.undated_count(), "undated records ignored");
    }

    let mut entities = index.entities();
    entities.extend(request.entities.iter().cloned());

    let mut series: Vec<TrendSeries> = entities
        .into_iter()
        .map(|entity| {
            let values: Vec<f64> = periods
                .iter()
                .map(|&period| value_at(index, &resolved, &entity, period).unwrap_or(0.0))
                .collect();
            let total = values.iter().sum();
            TrendSeries {
                entity,
                values,
                total,
            }
        })
        .collect();

    series.sort_by(|a, b| b.total.total_cmp(&a.total));
    if let Some(top) = request.top {
        series.truncate(top);
    }

    info!(
        metric,
        { metrics::TREND_PERIODS } = periods.len(),
        { metrics::TREND_SERIES } = series.len(),
        "trend aggregated"
    );

    TrendResult {
        metric: metric.to_string(),
        periods,
        series,
        unit: resolved.unit(),
        warnings,
    }
}

/// Value of the metric for (entity, period). Unknown metrics take the first
/// source, in fallback order, holding a numeric value.
pub(crate) fn value_at(
    index: &SnapshotIndex<'_>,
    resolved: &ResolvedMetric,
    entity: &str,
    period: Period,
) -> Option<f64> {
    resolved.sources().into_iter().find_map(|source| {
        let record = index.source(source)?.get(entity, period)?;
        resolved.extract(source, record)
    })
}

fn coverage_warning(index: &SnapshotIndex<'_>, resolved: &ResolvedMetric, metric: &str) -> Option<String> {
    match resolved {
        ResolvedMetric::Known(spec) => match index.source(spec.source) {
            Some(source) if !source.is_empty() => None,
            _ => Some(format!(
                "source '{}' has no dated records for metric '{metric}'",
                spec.source
            )),
        },
        ResolvedMetric::Unknown { fallback, .. } => {
            let carried = fallback.iter().any(|&id| {
                index.source(id).is_some_and(|source| {
                    source.records().any(|record| resolved.extract(id, record).is_some())
                })
            });
            (!carried).then(|| format!("metric '{metric}' is not mapped and no source carries it"))
        }
    }
}

/// Rank entities by their total over the last `months` months.
pub fn top_entities(
    snapshot: &SourceSnapshot,
    metric: &str,
    months: u32,
    top: usize,
) -> Vec<RankedEntity> {
    let request = TrendRequest {
        metric: metric.to_string(),
        selection: PeriodSelection::LastMonths { months },
        top: Some(top),
        entities: Vec::new(),
    };
    aggregate_trend(snapshot, &request)
        .series
        .into_iter()
        .map(|s| RankedEntity {
            entity: s.entity,
            total: s.total,
        })
        .collect()
}
