//! Configuration system for Pulse.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod forecast_config;
pub mod pulse_config;
pub mod trend_config;

pub use forecast_config::ForecastConfig;
pub use pulse_config::{ConfigOverrides, PulseConfig};
pub use trend_config::TrendConfig;
