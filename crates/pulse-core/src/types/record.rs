//! Raw records as supplied by the host application.

use serde_json::Value;

/// One heterogeneous record: a flat mapping of field name to JSON value.
/// Field shapes vary between sources and are resolved by the normalizer.
pub type RawRecord = serde_json::Map<String, Value>;

/// Records extracted from an untyped JSON payload, plus any issues found.
#[derive(Debug, Clone, Default)]
pub struct RecordBatch {
    pub records: Vec<RawRecord>,
    pub warnings: Vec<String>,
}

impl RecordBatch {
    /// Extract records from a JSON value that should be an array of objects.
    ///
    /// A non-array payload yields an empty batch with a warning. Array
    /// elements that are not objects are skipped with a warning each.
    pub fn from_value(value: &Value) -> Self {
        let mut batch = Self::default();
        let Some(items) = value.as_array() else {
            batch
                .warnings
                .push(format!("input is not a collection (got {})", kind_of(value)));
            return batch;
        };
        for (index, item) in items.iter().enumerate() {
            match item.as_object() {
                Some(record) => batch.records.push(record.clone()),
                None => batch.warnings.push(format!(
                    "skipped element {index}: expected an object, got {}",
                    kind_of(item)
                )),
            }
        }
        batch
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
