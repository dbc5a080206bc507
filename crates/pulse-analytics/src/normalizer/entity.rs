//! Entity (district) name resolution.

use pulse_core::constants::{ENTITY_FIELD_ALIASES, UNKNOWN_ENTITY};
use pulse_core::RawRecord;
use serde_json::Value;

/// Resolve the entity name of a record.
///
/// Tries `ENTITY_FIELD_ALIASES` in order; the first non-empty string (or
/// number, rendered as text) wins. Falls back to `"Unknown"` so a record is
/// never dropped for lacking an entity.
pub fn resolve_entity(record: &RawRecord) -> String {
    ENTITY_FIELD_ALIASES
        .iter()
        .find_map(|alias| match record.get(*alias) {
            Some(Value::String(name)) if !name.is_empty() => Some(name.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| UNKNOWN_ENTITY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(value: Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_primary_alias_wins() {
        let r = rec(json!({"district": "Cuttack", "District": "Other"}));
        assert_eq!(resolve_entity(&r), "Cuttack");
    }

    #[test]
    fn test_falls_back_to_capitalized_alias() {
        assert_eq!(resolve_entity(&rec(json!({"District": "Balasore"}))), "Balasore");
        assert_eq!(
            resolve_entity(&rec(json!({"district": "", "District": "Balasore"}))),
            "Balasore"
        );
    }

    #[test]
    fn test_defaults_to_unknown() {
        assert_eq!(resolve_entity(&rec(json!({"district": null}))), "Unknown");
        assert_eq!(resolve_entity(&rec(json!({}))), "Unknown");
    }
}
