//! # pulse-analytics
//!
//! Forecasting & trend-alert engine over monthly per-district records.
//!
//! ## Components (leaf-first)
//!
//! | Component | Role |
//! |-----------|------|
//! | `normalizer` | Heterogeneous records → (entity, period, value) points |
//! | `regression` | Closed-form least-squares fit over x = 1..n |
//! | `forecast` | Per-entity projection, RED/GREEN alerts, diagnostics |
//! | `trend` | Period windows, cross-source lookup, totals, rankings |
//!
//! Every entry point is a pure, synchronous function over caller-owned
//! collections. Nothing here fails: malformed input becomes warnings,
//! degenerate computations become skip reasons.

pub mod forecast;
pub mod normalizer;
pub mod regression;
pub mod trend;

pub use forecast::{
    evaluate_forecast, evaluate_forecast_value, Alert, AlertKind, ForecastDiagnostic,
    ForecastResult, ForecastSummary, ProjectionOverview,
};
pub use normalizer::{group_series, normalize_record, EntitySeries, MetricPoint, NormalizedRecord};
pub use regression::RegressionModel;
pub use trend::{
    aggregate_trend, latest_period_leaderboard, top_entities, Leaderboard, MetricUnit,
    PeriodSelection, RankedEntity, ResolvedMetric, TrendRequest, TrendResult, TrendSeries,
};
