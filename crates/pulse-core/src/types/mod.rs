//! Data types shared by every Pulse subsystem.
//! Periods, raw records, metric-source snapshots, and alert thresholds.

pub mod period;
pub mod record;
pub mod source;
pub mod thresholds;

pub use period::Period;
pub use record::{RawRecord, RecordBatch};
pub use source::{SourceId, SourceSnapshot};
pub use thresholds::{AlertThresholds, ForecastOptions};
