//! Static metric catalog: which source and field(s) back each metric key.

use std::fmt;

use pulse_core::{RawRecord, SourceId};
use serde::{Deserialize, Serialize};

use crate::normalizer::numeric_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricUnit {
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "grams")]
    Grams,
    #[serde(rename = "count")]
    Count,
    #[serde(rename = "percent")]
    Percent,
    /// Unmapped metrics carry no unit.
    #[serde(rename = "")]
    Unspecified,
}

impl MetricUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Grams => "grams",
            Self::Count => "count",
            Self::Percent => "percent",
            Self::Unspecified => "",
        }
    }
}

impl fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a metric's value lives inside one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSpec {
    Single(&'static str),
    /// Sum of sub-fields; missing or non-numeric sub-fields count 0.
    Sum(&'static [&'static str]),
}

impl FieldSpec {
    /// Numeric value in `record`, or `None` when no field is numeric.
    pub fn extract(&self, record: &RawRecord) -> Option<f64> {
        match self {
            Self::Single(field) => record.get(*field).and_then(numeric_value),
            Self::Sum(fields) => {
                let mut found = false;
                let total = fields
                    .iter()
                    .filter_map(|field| record.get(*field).and_then(numeric_value))
                    .inspect(|_| found = true)
                    .sum::<f64>();
                found.then_some(total)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    pub key: &'static str,
    pub source: SourceId,
    pub fields: FieldSpec,
    pub unit: MetricUnit,
}

const NARCOTICS_SEIZED_KG_FIELDS: &[&str] = &[
    "ganja_kg",
    "charas_kg",
    "opium_kg",
    "poppy_husk_kg",
    "bhang_kg",
    "cannabis_plants_kg",
    "other_narcotics_kg",
];

pub const METRIC_CATALOG: &[MetricSpec] = &[
    MetricSpec {
        key: "conviction_rate",
        source: SourceId::Conviction,
        fields: FieldSpec::Single("conviction_rate"),
        unit: MetricUnit::Percent,
    },
    MetricSpec {
        key: "pendency_percentage",
        source: SourceId::Pendency,
        fields: FieldSpec::Single("pendency_percentage"),
        unit: MetricUnit::Percent,
    },
    MetricSpec {
        key: "nbw_executed",
        source: SourceId::Nbw,
        fields: FieldSpec::Single("executed_total"),
        unit: MetricUnit::Count,
    },
    MetricSpec {
        key: "nbw_received",
        source: SourceId::Nbw,
        fields: FieldSpec::Single("received_this_month"),
        unit: MetricUnit::Count,
    },
    MetricSpec {
        key: "nbw_pending",
        source: SourceId::Nbw,
        fields: FieldSpec::Single("pending_end_of_month"),
        unit: MetricUnit::Count,
    },
    MetricSpec {
        key: "narcotics_ganja_kg",
        source: SourceId::Narcotics,
        fields: FieldSpec::Single("ganja_kg"),
        unit: MetricUnit::Kg,
    },
    MetricSpec {
        key: "narcotics_brownsugar_gm",
        source: SourceId::Narcotics,
        fields: FieldSpec::Single("brownsugar_gm"),
        unit: MetricUnit::Grams,
    },
    MetricSpec {
        key: "total_seized_kg",
        source: SourceId::Narcotics,
        fields: FieldSpec::Sum(NARCOTICS_SEIZED_KG_FIELDS),
        unit: MetricUnit::Kg,
    },
    MetricSpec {
        key: "firearms_seized",
        source: SourceId::Firearms,
        fields: FieldSpec::Single("firearms_seized"),
        unit: MetricUnit::Count,
    },
    MetricSpec {
        key: "sand_mining_cases",
        source: SourceId::SandMining,
        fields: FieldSpec::Single("cases_registered"),
        unit: MetricUnit::Count,
    },
];

/// A metric key resolved once per request.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedMetric {
    Known(&'static MetricSpec),
    /// Not in the catalog: look for a field named after the key itself,
    /// trying sources in `fallback` order.
    Unknown { field: String, fallback: Vec<SourceId> },
}

impl ResolvedMetric {
    pub fn resolve(key: &str) -> Self {
        match METRIC_CATALOG.iter().find(|spec| spec.key == key) {
            Some(spec) => Self::Known(spec),
            None => Self::Unknown {
                field: key.to_string(),
                fallback: SourceId::ALL.to_vec(),
            },
        }
    }

    pub fn unit(&self) -> MetricUnit {
        match self {
            Self::Known(spec) => spec.unit,
            Self::Unknown { .. } => MetricUnit::Unspecified,
        }
    }

    /// Sources consulted for this metric, in priority order.
    pub fn sources(&self) -> Vec<SourceId> {
        match self {
            Self::Known(spec) => vec![spec.source],
            Self::Unknown { fallback, .. } => fallback.clone(),
        }
    }

    /// Value from a record of `source`, if that source backs this metric.
    pub fn extract(&self, source: SourceId, record: &RawRecord) -> Option<f64> {
        match self {
            Self::Known(spec) if spec.source == source => spec.fields.extract(record),
            Self::Known(_) => None,
            Self::Unknown { field, .. } => record.get(field.as_str()).and_then(numeric_value),
        }
    }
}
