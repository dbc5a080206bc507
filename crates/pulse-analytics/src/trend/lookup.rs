//! Entity → period → record indexes over a snapshot.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use pulse_core::{Period, RawRecord, SourceId, SourceSnapshot};

use crate::normalizer::{resolve_entity, resolve_period};

/// Index over one source's records.
///
/// Records without a resolvable period are left out. When two records share
/// an (entity, period), the later one wins.
#[derive(Debug, Default)]
pub struct SourceIndex<'a> {
    by_entity: HashMap<String, HashMap<Period, &'a RawRecord>>,
    latest: Option<Period>,
    undated: usize,
}

impl<'a> SourceIndex<'a> {
    pub fn build(records: &'a [RawRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            let Some(period) = resolve_period(record).period() else {
                index.undated += 1;
                continue;
            };
            index
                .by_entity
                .entry(resolve_entity(record))
                .or_default()
                .insert(period, record);
            index.latest = index.latest.max(Some(period));
        }
        index
    }

    pub fn get(&self, entity: &str, period: Period) -> Option<&'a RawRecord> {
        self.by_entity.get(entity)?.get(&period).copied()
    }

    pub fn entities(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_entity.keys().map(String::as_str)
    }

    /// Every indexed record, in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &'a RawRecord> + '_ {
        self.by_entity.values().flat_map(|periods| periods.values().copied())
    }

    /// Most recent period among indexed records.
    pub fn latest_period(&self) -> Option<Period> {
        self.latest
    }

    /// Records skipped for lacking a period.
    pub fn undated_count(&self) -> usize {
        self.undated
    }

    pub fn is_empty(&self) -> bool {
        self.by_entity.is_empty()
    }
}

/// One `SourceIndex` per source in a snapshot.
#[derive(Debug, Default)]
pub struct SnapshotIndex<'a> {
    sources: BTreeMap<SourceId, SourceIndex<'a>>,
}

impl<'a> SnapshotIndex<'a> {
    pub fn build(snapshot: &'a SourceSnapshot) -> Self {
        Self {
            sources: snapshot
                .iter()
                .map(|(id, records)| (id, SourceIndex::build(records)))
                .collect(),
        }
    }

    pub fn source(&self, id: SourceId) -> Option<&SourceIndex<'a>> {
        self.sources.get(&id)
    }

    /// Most recent period across the given sources.
    pub fn latest_period_in(&self, ids: &[SourceId]) -> Option<Period> {
        ids.iter()
            .filter_map(|id| self.source(*id)?.latest_period())
            .max()
    }

    /// Most recent period across every source.
    pub fn latest_period(&self) -> Option<Period> {
        self.sources.values().filter_map(SourceIndex::latest_period).max()
    }

    /// Union of entity names across every source, in name order.
    pub fn entities(&self) -> BTreeSet<String> {
        self.sources
            .values()
            .flat_map(|index| index.entities().map(str::to_string))
            .collect()
    }

    pub fn undated_count(&self) -> usize {
        self.sources.values().map(SourceIndex::undated_count).sum()
    }
}
