//! Folds an edit script into index-translation rules for outline node keys.
//!
//! Node keys encode a flat index, so after any insertion or deletion every key past that point
//! refers to the wrong heading. [`ModifyKeys`] records how old indices shift, which old ranges
//! vanished, where new headings appeared, and which surviving headings changed between parent
//! and leaf.

use crate::diff::{diff, DiffOp, LevelChange};
use crate::heading::Heading;
use serde::Serialize;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Old indices at or past `begin` move by `offset`.
pub struct OffsetModify {
    /// First old index the shift applies to.
    pub begin: usize,
    /// Cumulative shift from old to new index.
    pub offset: isize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// A contiguous range of old indices that was deleted.
pub struct Remove {
    /// First deleted old index.
    pub begin: usize,
    /// Number of deleted headings.
    pub length: usize,
}

impl Remove {
    #[must_use]
    /// Whether an old index falls inside the deleted range.
    pub fn contains(&self, index: usize) -> bool {
        (self.begin..self.begin + self.length).contains(&index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Position in the new sequence where headings were inserted.
pub struct Add {
    /// New index of the first inserted heading.
    pub begin: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// A surviving heading whose parent/leaf role changed.
pub struct Modify {
    /// Index in the old sequence.
    pub old_begin: usize,
    /// Index in the new sequence.
    pub new_begin: usize,
    /// How the role changed.
    pub level_change_type: LevelChange,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Everything the expansion reconciler needs to migrate keys from one sequence to the next.
pub struct ModifyKeys {
    /// Shift rules, non-decreasing in `begin`; the last rule with `begin <= index` applies.
    pub offset_modifies: Vec<OffsetModify>,
    /// Deleted old ranges.
    pub removes: Vec<Remove>,
    /// Insertion points in the new sequence.
    pub adds: Vec<Add>,
    /// Role changes of surviving headings (leaf-to-leaf edits are not recorded).
    pub modifies: Vec<Modify>,
}

impl ModifyKeys {
    #[must_use]
    /// Whether the two sequences were structurally identical.
    pub fn is_empty(&self) -> bool {
        self.offset_modifies.is_empty()
            && self.removes.is_empty()
            && self.adds.is_empty()
            && self.modifies.is_empty()
    }

    #[must_use]
    /// Maps an old index to its new index using the last applicable shift rule.
    ///
    /// Returns `None` when the shift would land before the start of the sequence, which only
    /// happens for indices inside a deleted range.
    pub fn translate(&self, index: usize) -> Option<usize> {
        let offset = self
            .offset_modifies
            .iter()
            .rev()
            .find(|rule| rule.begin <= index)
            .map_or(0, |rule| rule.offset);
        index.checked_add_signed(offset)
    }

    #[must_use]
    /// Whether an old index was deleted.
    pub fn is_removed(&self, index: usize) -> bool {
        self.removes.iter().any(|r| r.contains(index))
    }

    #[must_use]
    /// The recorded role change for an old index, if any.
    pub fn modify_at(&self, old_index: usize) -> Option<&Modify> {
        self.modifies.iter().find(|m| m.old_begin == old_index)
    }
}

#[allow(clippy::cast_possible_wrap)]
fn signed(n: usize) -> isize {
    n as isize
}

#[must_use]
/// Diffs `prev` against `cur` and folds the edit script into [`ModifyKeys`].
///
/// A running offset tracks the new-minus-old index shift. Insertions are recorded at their new
/// position before the offset grows; deletions shrink the offset first and record the shift
/// from just past the deleted range.
pub fn calc_modifies(prev: &[Heading], cur: &[Heading]) -> ModifyKeys {
    let mut keys = ModifyKeys::default();
    let mut offset: isize = 0;

    for op in diff(prev, cur) {
        match op {
            DiffOp::Add { begin, length } => {
                keys.adds.push(Add {
                    begin: begin.saturating_add_signed(offset),
                });
                offset += signed(length);
                keys.offset_modifies.push(OffsetModify { begin, offset });
            }
            DiffOp::Remove { begin, length } => {
                offset -= signed(length);
                keys.offset_modifies.push(OffsetModify {
                    begin: begin + length,
                    offset,
                });
                keys.removes.push(Remove { begin, length });
            }
            DiffOp::Modify {
                begin,
                level_change,
                ..
            } => {
                if level_change != LevelChange::Child2Child {
                    keys.modifies.push(Modify {
                        old_begin: begin,
                        new_begin: begin.saturating_add_signed(offset),
                        level_change_type: level_change,
                    });
                }
            }
        }
    }

    debug!(
        adds = keys.adds.len(),
        removes = keys.removes.len(),
        modifies = keys.modifies.len(),
        "calculated outline key modifications"
    );
    keys
}

#[cfg(test)]
#[path = "tests/modify_keys.rs"]
mod tests;
