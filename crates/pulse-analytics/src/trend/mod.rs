//! Trend aggregation across metric sources.
//!
//! A request names a metric and a period window. The metric is resolved once
//! against the static catalog, every source is indexed entity → period →
//! record, and one series per entity is produced, aligned 1:1 with the
//! window's periods.

pub mod aggregator;
pub mod catalog;
pub mod leaderboard;
pub mod lookup;
pub mod types;
pub mod window;

pub use aggregator::{aggregate_trend, top_entities};
pub use catalog::{FieldSpec, MetricSpec, MetricUnit, ResolvedMetric, METRIC_CATALOG};
pub use leaderboard::latest_period_leaderboard;
pub use lookup::{SnapshotIndex, SourceIndex};
pub use types::{
    Leaderboard, LeaderboardEntry, PeriodSelection, RankedEntity, TrendRequest, TrendResult,
    TrendSeries,
};
