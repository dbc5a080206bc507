//! Record normalization: heterogeneous rows → canonical metric points.
//!
//! Field probing is explicit: ordered alias lists with documented defaults,
//! never reflection. See `entity`, `period`, and `value` for each rule.

pub mod entity;
pub mod period;
pub mod value;

use std::collections::HashMap;

use pulse_core::{Period, RawRecord};
use serde_json::Value;

pub use entity::resolve_entity;
pub use period::{resolve_period, PeriodResolution};
pub use value::numeric_value;

/// One numeric observation of a metric for an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricPoint {
    pub entity: String,
    /// `None` when no period could be resolved (undated).
    pub period: Option<Period>,
    pub value: f64,
}

/// Result of normalizing one raw record against one metric key.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub entity: String,
    pub period: Option<Period>,
    /// `None` when the metric value is missing or non-numeric; such records
    /// are excluded from computation, never coerced to zero.
    pub value: Option<f64>,
    /// Issues found while normalizing (non-numeric value, unparseable date).
    pub warnings: Vec<String>,
}

impl NormalizedRecord {
    /// The canonical point, if the record carried a numeric value.
    pub fn point(&self) -> Option<MetricPoint> {
        self.value.map(|value| MetricPoint {
            entity: self.entity.clone(),
            period: self.period,
            value,
        })
    }
}

/// Normalize one record for `metric`.
pub fn normalize_record(record: &RawRecord, metric: &str) -> NormalizedRecord {
    let entity = resolve_entity(record);
    let mut warnings = Vec::new();

    let period = match resolve_period(record) {
        PeriodResolution::Resolved(period) => Some(period),
        PeriodResolution::Undated => None,
        PeriodResolution::Unparseable(raw) => {
            warnings.push(format!("unparseable date '{raw}'; record treated as undated"));
            None
        }
    };

    let raw_value = record.get(metric);
    let value = raw_value.and_then(numeric_value);
    if value.is_none() {
        warnings.push(format!(
            "skipped non-numeric {metric} value: {}",
            describe(raw_value)
        ));
    }

    NormalizedRecord {
        entity,
        period,
        value,
        warnings,
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "missing".to_string(),
        Some(Value::String(s)) => format!("\"{s}\""),
        Some(other) => other.to_string(),
    }
}

/// All points for one entity, sorted for regression.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntitySeries {
    pub entity: String,
    pub points: Vec<MetricPoint>,
    /// Warnings collected from this entity's records, in input order.
    pub warnings: Vec<String>,
}

impl EntitySeries {
    /// Values in series order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Normalize `records` for `metric` and group them per entity.
///
/// Entities appear in first-appearance order, including entities whose rows
/// were all non-numeric (empty `points`, populated `warnings`).
///
/// Within a series, dated points ascend by period. Undated points sort
/// *before* every dated point and keep their input order: `Option<Period>`
/// orders `None` first and the sort is stable.
pub fn group_series(records: &[RawRecord], metric: &str) -> Vec<EntitySeries> {
    let mut series: Vec<EntitySeries> = Vec::new();
    let mut slot_of: HashMap<String, usize> = HashMap::new();

    for record in records {
        let normalized = normalize_record(record, metric);
        let slot = *slot_of.entry(normalized.entity.clone()).or_insert_with(|| {
            series.push(EntitySeries {
                entity: normalized.entity.clone(),
                ..Default::default()
            });
            series.len() - 1
        });
        let target = &mut series[slot];
        if let Some(point) = normalized.point() {
            target.points.push(point);
        }
        target.warnings.extend(normalized.warnings);
    }

    for entity_series in &mut series {
        entity_series.points.sort_by_key(|p| p.period);
    }
    series
}
