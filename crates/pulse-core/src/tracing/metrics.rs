//! Structured span field names for Pulse log events.
//!
//! Shared by every analytics subsystem so log queries can filter on the
//! same keys regardless of which component emitted the event.

/// Forecast: entities evaluated in one run.
pub const FORECAST_ENTITIES: &str = "forecast_entities";

/// Forecast: alerts raised in one run.
pub const FORECAST_ALERTS: &str = "forecast_alerts";

/// Trend: number of periods in the window.
pub const TREND_PERIODS: &str = "trend_periods";

/// Trend: number of series returned after truncation.
pub const TREND_SERIES: &str = "trend_series";
