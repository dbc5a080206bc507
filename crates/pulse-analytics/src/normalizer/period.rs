//! Period resolution from the record's date-ish fields.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use pulse_core::constants::{DATE_FIELD, MONTH_FIELD, YEAR_FIELD};
use pulse_core::{Period, RawRecord};
use serde_json::Value;

use super::value::integral_value;

/// Outcome of probing a record for its reporting period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodResolution {
    Resolved(Period),
    /// No period field present (or none usable and no `date` given).
    Undated,
    /// A `date` field was present but matched no supported format.
    Unparseable(String),
}

impl PeriodResolution {
    pub fn period(&self) -> Option<Period> {
        match self {
            Self::Resolved(period) => Some(*period),
            _ => None,
        }
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Resolve the period of a record. First match wins:
///
/// 1. `year` + `month`, both integral (numbers or numeric strings), month 1..=12
/// 2. `month` formatted `YYYY-MM`
/// 3. `date` as RFC 3339, ISO date, ISO date-time, `YYYY/MM/DD`, or epoch millis
pub fn resolve_period(record: &RawRecord) -> PeriodResolution {
    if let Some(period) = from_year_month(record) {
        return PeriodResolution::Resolved(period);
    }
    if let Some(period) = record
        .get(MONTH_FIELD)
        .and_then(Value::as_str)
        .and_then(|key| key.trim().parse::<Period>().ok())
    {
        return PeriodResolution::Resolved(period);
    }
    match record.get(DATE_FIELD) {
        None | Some(Value::Null) => PeriodResolution::Undated,
        Some(Value::String(s)) if s.trim().is_empty() => PeriodResolution::Undated,
        Some(raw) => match parse_date(raw) {
            Some(period) => PeriodResolution::Resolved(period),
            None => PeriodResolution::Unparseable(match raw {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
        },
    }
}

fn from_year_month(record: &RawRecord) -> Option<Period> {
    let year = integral_value(record.get(YEAR_FIELD)?)?;
    let month = integral_value(record.get(MONTH_FIELD)?)?;
    Period::new(i32::try_from(year).ok()?, u32::try_from(month).ok()?).ok()
}

fn parse_date(raw: &Value) -> Option<Period> {
    match raw {
        Value::Number(n) => {
            let millis = n.as_i64()?;
            DateTime::from_timestamp_millis(millis).and_then(|dt| Period::from_date(&dt).ok())
        }
        Value::String(s) => parse_date_str(s.trim()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<Period> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Period::from_date(&dt).ok();
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Period::from_date(&date).ok();
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Period::from_date(&dt).ok();
        }
    }
    None
}
