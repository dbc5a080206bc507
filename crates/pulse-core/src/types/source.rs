//! Metric sources and the immutable snapshot the host loads once.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::RawRecord;

/// Identifies one metric-source collection.
///
/// Declaration order is the fallback probing priority used for metric keys
/// that are not in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    /// Court conviction returns.
    Conviction,
    /// Case pendency returns.
    Pendency,
    /// Non-bailable warrant drive returns.
    Nbw,
    /// Narcotics seizure drive returns.
    Narcotics,
    /// Firearms seizure drive returns.
    Firearms,
    /// Illegal sand mining drive returns.
    SandMining,
}

impl SourceId {
    /// All sources, in fallback priority order.
    pub const ALL: [SourceId; 6] = [
        SourceId::Conviction,
        SourceId::Pendency,
        SourceId::Nbw,
        SourceId::Narcotics,
        SourceId::Firearms,
        SourceId::SandMining,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Conviction => "conviction",
            Self::Pendency => "pendency",
            Self::Nbw => "nbw",
            Self::Narcotics => "narcotics",
            Self::Firearms => "firearms",
            Self::SandMining => "sand_mining",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only set of metric-source collections.
///
/// Built once by the host and shared (e.g. behind an `Arc`) across requests.
/// Deserializes from an object keyed by source name, e.g.
/// `{"nbw": [...], "narcotics": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceSnapshot {
    sources: BTreeMap<SourceId, Vec<RawRecord>>,
}

impl SourceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with_source(mut self, id: SourceId, records: Vec<RawRecord>) -> Self {
        self.insert(id, records);
        self
    }

    /// Add records to a source, appending to any already present.
    pub fn insert(&mut self, id: SourceId, records: Vec<RawRecord>) {
        self.sources.entry(id).or_default().extend(records);
    }

    /// Records of one source; empty when the source was never loaded.
    pub fn records(&self, id: SourceId) -> &[RawRecord] {
        self.sources.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Loaded sources in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (SourceId, &[RawRecord])> + '_ {
        self.sources.iter().map(|(id, records)| (*id, records.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.sources.values().all(Vec::is_empty)
    }

    pub fn total_records(&self) -> usize {
        self.sources.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keyed_by_source_name() {
        let snapshot: SourceSnapshot = serde_json::from_value(json!({
            "nbw": [{"district": "Puri", "executed_total": 4}],
            "sand_mining": []
        }))
        .unwrap();
        assert_eq!(snapshot.records(SourceId::Nbw).len(), 1);
        assert!(snapshot.records(SourceId::Narcotics).is_empty());
        assert_eq!(snapshot.total_records(), 1);
    }

    #[test]
    fn test_insert_appends() {
        let record = json!({"district": "Puri"}).as_object().cloned().unwrap();
        let mut snapshot = SourceSnapshot::new();
        snapshot.insert(SourceId::Firearms, vec![record.clone()]);
        snapshot.insert(SourceId::Firearms, vec![record]);
        assert_eq!(snapshot.records(SourceId::Firearms).len(), 2);
    }

    #[test]
    fn test_fallback_order_matches_declaration() {
        let mut sorted = SourceId::ALL;
        sorted.sort();
        assert_eq!(sorted, SourceId::ALL);
    }
}
