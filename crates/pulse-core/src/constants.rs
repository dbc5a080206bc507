//! Shared constants for the Pulse analytics engine.

// ---- Forecasting ----

/// Default projected fraction above which a rising trend raises a RED alert.
pub const DEFAULT_INCREASE_THRESHOLD: f64 = 0.10;

/// Default projected fraction below which a falling trend raises a GREEN alert.
pub const DEFAULT_DECREASE_THRESHOLD: f64 = -0.10;

/// Default minimum number of samples before regression is used.
pub const DEFAULT_MIN_POINTS: usize = 2;

/// Single-sample heuristic: percentage-like values at or above this are RED
/// (unless the increase threshold, in percent, is higher).
pub const SINGLE_POINT_RED_FLOOR_PCT: f64 = 30.0;

/// Single-sample heuristic: percentage-like values at or below this are GREEN
/// (unless the decrease threshold magnitude, in percent, is lower).
pub const SINGLE_POINT_GREEN_CEILING_PCT: f64 = 10.0;

/// Lower bound of the range treated as percentage-like.
pub const PERCENT_LIKE_MIN: f64 = 0.0;

/// Upper bound of the range treated as percentage-like.
pub const PERCENT_LIKE_MAX: f64 = 100.0;

// ---- Records ----

/// Entity name used when no alias field carries one.
pub const UNKNOWN_ENTITY: &str = "Unknown";

/// Candidate entity fields, highest priority first.
pub const ENTITY_FIELD_ALIASES: [&str; 2] = ["district", "District"];

/// Field holding a numeric year.
pub const YEAR_FIELD: &str = "year";

/// Field holding a numeric month or a `YYYY-MM` key.
pub const MONTH_FIELD: &str = "month";

/// Field holding a free-form calendar date.
pub const DATE_FIELD: &str = "date";

/// Earliest year a `Period` accepts.
pub const MIN_PERIOD_YEAR: i32 = 1;

/// Latest year a `Period` accepts; matches the four-digit `YYYY-MM` key.
pub const MAX_PERIOD_YEAR: i32 = 9999;

// ---- Trends ----

/// Default look-back window in months.
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// Default number of entities kept by ranking views.
pub const DEFAULT_TREND_TOP: usize = 5;

/// Longest trend window, in months, a request may ask for.
pub const MAX_TREND_MONTHS: u32 = 240;
