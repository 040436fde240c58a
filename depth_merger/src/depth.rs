use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use crate::error::MergeError;

/// Per-position counts for a single sequence.
/// Positions are kept sorted so iteration is always in ascending order.
/// A table read from a file with no records has no sequence name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthTable {
    seq: Option<String>,
    counts: BTreeMap<u64, u64>,
}

impl DepthTable {
    pub fn new(seq: String) -> Self {
        Self {
            seq: Some(seq),
            counts: BTreeMap::new(),
        }
    }

    pub fn seq(&self) -> Option<&str> {
        self.seq.as_deref()
    }

    /// Set the count for a position, returning the previous count if the
    /// position was already present
    pub fn insert(&mut self, pos: u64, count: u64) -> Option<u64> {
        self.counts.insert(pos, count)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// (position, count) pairs in ascending position order
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(p, c)| (*p, *c))
    }
}

/// Combine depth tables by summing counts per position
///
/// All tables must be for the same sequence and cover exactly the same
/// set of positions. The first named table sets the sequence; the first
/// table is the reference for the position checks.  Tables without a
/// sequence name (no records) take part in the position checks only.
pub fn merge_tables<P: AsRef<Path>>(tables: &[(P, DepthTable)]) -> Result<DepthTable, MergeError> {
    let ((ref_path, reference), rest) = tables.split_first().ok_or(MergeError::NoInput)?;
    let ref_path = ref_path.as_ref();

    let mut seq: Option<&str> = None;
    for (p, t) in tables {
        match (seq, t.seq()) {
            (Some(s), Some(x)) if s != x => {
                return Err(MergeError::SequenceMismatch {
                    path: p.as_ref().to_owned(),
                    expected: s.to_owned(),
                    found: x.to_owned(),
                })
            }
            (None, Some(x)) => seq = Some(x),
            _ => (),
        }
    }

    let sizes: BTreeSet<usize> = tables.iter().map(|(_, t)| t.len()).collect();
    if sizes.len() != 1 {
        return Err(MergeError::PositionCountMismatch {
            sizes: sizes.into_iter().collect(),
        });
    }

    for (p, t) in rest {
        if let Some(position) = reference.counts.keys().find(|x| !t.counts.contains_key(*x)) {
            return Err(MergeError::PositionSetMismatch {
                reference: ref_path.to_owned(),
                path: p.as_ref().to_owned(),
                position: *position,
            });
        }
    }

    trace!(
        "Summing {} positions across {} depth tables",
        reference.len(),
        tables.len()
    );

    // Position sets are identical, so the sorted maps line up entry for entry
    let mut combined = reference.clone();
    combined.seq = seq.map(|s| s.to_owned());
    for (_, t) in rest {
        for ((pos, c), x) in combined.counts.iter_mut().zip(t.counts.values()) {
            *c = c
                .checked_add(*x)
                .ok_or(MergeError::CountOverflow { position: *pos })?;
        }
    }
    Ok(combined)
}
