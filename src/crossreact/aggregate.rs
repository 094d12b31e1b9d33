//! Per-candidate mismatch-bucket accumulation
//!
//! Bucket accumulation is commutative and associative (set union), which is
//! what makes the sharded path safe: partial maps built from record chunks
//! merge into the same result as one sequential pass, as long as chunks are
//! merged in input order so the first-seen sequence capture is preserved.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::sam::AlignmentRecord;
use crate::sequence::gc_content;

/// Distinct accessions observed for one (candidate, mismatch level) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchBucket {
    pub accessions: BTreeSet<String>,
}

/// Everything accumulated for one candidate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAggregate {
    /// Raw sequence of the first record seen for this candidate.
    pub sequence: String,
    /// GC content of that sequence, percent, rounded to 2 decimals.
    pub gc_content: f64,
    /// Mismatch level -> accession bucket; BTreeMap keeps levels in
    /// ascending numeric order for the report stage.
    pub mismatches: BTreeMap<u32, MismatchBucket>,
}

impl CandidateAggregate {
    fn new(sequence: &str) -> Self {
        Self {
            sequence: sequence.to_string(),
            gc_content: round2(gc_content(sequence)),
            mismatches: BTreeMap::new(),
        }
    }

    fn insert(&mut self, record: AlignmentRecord) {
        self.mismatches
            .entry(record.mismatches)
            .or_default()
            .accessions
            .insert(record.accession);
    }
}

/// Candidate id -> aggregate. Iteration order carries no guarantee;
/// consumers sort explicitly.
pub type AggregateMap = FxHashMap<String, CandidateAggregate>;

/// Fold a record stream into an owned aggregate map.
///
/// The first record for a candidate id materializes the aggregate and fixes
/// its sequence and GC content; every record inserts its accession into the
/// lazily created bucket for its mismatch level.
pub fn aggregate(records: impl IntoIterator<Item = AlignmentRecord>) -> AggregateMap {
    let mut map = AggregateMap::default();
    for record in records {
        map.entry(record.oligo_id.clone())
            .or_insert_with(|| CandidateAggregate::new(&record.sequence))
            .insert(record);
    }
    map
}

/// Merge `other` into `into`. Buckets union; for a candidate present in
/// both, `into`'s sequence and GC content win (it is the earlier shard).
pub fn merge(into: &mut AggregateMap, other: AggregateMap) {
    for (oligo_id, aggregate) in other {
        match into.entry(oligo_id) {
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(aggregate);
            }
            std::collections::hash_map::Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                for (level, bucket) in aggregate.mismatches {
                    existing
                        .mismatches
                        .entry(level)
                        .or_default()
                        .accessions
                        .extend(bucket.accessions);
                }
            }
        }
    }
}

/// Accessions recorded for one candidate at one mismatch level, if any.
pub fn find_accessions<'a>(
    aggregates: &'a AggregateMap,
    oligo_id: &str,
    mismatch_level: u32,
) -> Option<&'a BTreeSet<String>> {
    aggregates
        .get(oligo_id)
        .and_then(|agg| agg.mismatches.get(&mismatch_level))
        .map(|bucket| &bucket.accessions)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
