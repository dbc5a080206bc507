//! Forecast evaluation: per-entity regression projection and alerting.
//!
//! Each entity's series is fitted with least squares over x = 1..n and the
//! next step is projected. Series shorter than `min_points` fall back to a
//! single-point heuristic on percent-like values.

pub mod evaluator;
pub mod overview;
pub mod single_point;
pub mod types;

pub use evaluator::{evaluate_forecast, evaluate_forecast_value};
pub use overview::{ProjectedChange, ProjectionOverview};
pub use types::{
    Alert, AlertCounts, AlertDecision, AlertKind, ForecastDiagnostic, ForecastResult,
    ForecastSummary,
};
