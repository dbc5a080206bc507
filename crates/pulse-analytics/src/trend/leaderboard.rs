//! Latest-period leaderboard.

use pulse_core::SourceSnapshot;
use tracing::warn;

use super::aggregator::aggregate_with_index;
use super::catalog::ResolvedMetric;
use super::lookup::SnapshotIndex;
use super::types::{Leaderboard, LeaderboardEntry, TrendRequest};

/// Rank every entity by its value in the most recent period of `metric`.
///
/// The period is the latest one in the metric's own source, or across all
/// sources for unmapped metrics. Entries descend by value; ties keep entity
/// name order.
pub fn latest_period_leaderboard(snapshot: &SourceSnapshot, metric: &str) -> Leaderboard {
    let index = SnapshotIndex::build(snapshot);
    let resolved = ResolvedMetric::resolve(metric);
    let latest = index.latest_period_in(&resolved.sources());

    let Some(period) = latest else {
        warn!(metric, "leaderboard requested with no dated records");
        return Leaderboard {
            metric: metric.to_string(),
            period: None,
            unit: resolved.unit(),
            entries: Vec::new(),
            warnings: vec![format!("no dated records for metric '{metric}'")],
        };
    };

    let trend = aggregate_with_index(&index, &TrendRequest::range(metric, period, period));
    Leaderboard {
        metric: trend.metric,
        period: Some(period),
        unit: trend.unit,
        entries: trend
            .series
            .into_iter()
            .map(|s| LeaderboardEntry {
                value: s.total,
                entity: s.entity,
            })
            .collect(),
        warnings: trend.warnings,
    }
}
