//! Numeric coercion of metric values.

use serde_json::Value;

/// Interpret a JSON value as a finite number.
///
/// Numbers and numeric strings (surrounding whitespace ignored) qualify.
/// Null, booleans, blank strings, arrays, objects, and non-finite values do
/// not: they are never coerced to zero.
pub fn numeric_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Like `numeric_value`, but only for integral numbers.
pub(crate) fn integral_value(value: &Value) -> Option<i64> {
    let number = numeric_value(value)?;
    (number.fract() == 0.0 && number.abs() < i64::MAX as f64).then_some(number as i64)
}
