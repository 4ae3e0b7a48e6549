//! Edit script between two heading sequences.
//!
//! Headings are reparsed after every edit, so the previous and current sequences usually differ
//! by a handful of entries. A single forward scan with two cursors finds the locally cheapest
//! resynchronisation at every mismatch rather than computing a globally minimal edit distance:
//! heading counts are small and the result only has to keep the outline stable while typing.

use crate::heading::Heading;
use serde::Serialize;

/// Furthest distance the scan looks ahead when testing whether a run of headings was edited in
/// place.
pub const MODIFY_LOOKAHEAD: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// How a heading's parent/leaf role changed across an in-place modification.
pub enum LevelChange {
    /// Had children before and still has children.
    Parent2Parent,
    /// Had children before, now a leaf.
    Parent2Child,
    /// Was a leaf, now has children.
    Child2Parent,
    /// A leaf before and after.
    Child2Child,
}

impl LevelChange {
    #[must_use]
    /// Classifies from whether the heading had children before and after.
    pub fn from_roles(was_parent: bool, is_parent: bool) -> Self {
        match (was_parent, is_parent) {
            (true, true) => Self::Parent2Parent,
            (true, false) => Self::Parent2Child,
            (false, true) => Self::Child2Parent,
            (false, false) => Self::Child2Child,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
/// One step of the edit script. Every `begin` is an index into the previous sequence.
pub enum DiffOp {
    /// `length` headings were inserted before previous index `begin`.
    Add {
        /// Previous-sequence index the insertion happens before.
        begin: usize,
        /// Number of inserted headings.
        length: usize,
    },
    /// `length` previous headings starting at `begin` were deleted.
    Remove {
        /// First deleted previous-sequence index.
        begin: usize,
        /// Number of deleted headings.
        length: usize,
    },
    /// `length` headings starting at `begin` were edited in place.
    Modify {
        /// Previous-sequence index of the first edited heading.
        begin: usize,
        /// Number of headings in the edited run.
        length: usize,
        /// Structural consequence of the edit, judged at the first heading of the run.
        level_change: LevelChange,
    },
}

/// Candidate resynchronisation distance at a mismatch.
///
/// A distance where a matching heading was actually found ranks ahead of a fallback distance of
/// the same size (which just consumes the rest of a sequence).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Found(usize),
    Fallback(usize),
    Unbounded,
}

impl Step {
    fn rank(self) -> (usize, u8) {
        match self {
            Self::Found(k) => (k, 0),
            Self::Fallback(k) => (k, 1),
            Self::Unbounded => (usize::MAX, 2),
        }
    }

    fn len(self) -> usize {
        match self {
            Self::Found(k) | Self::Fallback(k) => k,
            Self::Unbounded => 0,
        }
    }
}

fn has_child(headings: &[Heading], index: usize) -> bool {
    match (headings.get(index), headings.get(index + 1)) {
        (Some(current), Some(next)) => next.level > current.level,
        _ => false,
    }
}

/// Insertions needed before `cur[j..]` lines up with `prev[i]` again.
fn step_add(prev: &[Heading], cur: &[Heading], i: usize, j: usize) -> Step {
    cur[j..]
        .iter()
        .position(|h| h.same_entry(&prev[i]))
        .map_or(Step::Fallback(cur.len() - j), Step::Found)
}

/// Deletions needed before `prev[i..]` lines up with `cur[j]` again.
fn step_remove(prev: &[Heading], cur: &[Heading], i: usize, j: usize) -> Step {
    prev[i..]
        .iter()
        .position(|h| h.same_entry(&cur[j]))
        .map_or(Step::Fallback(prev.len() - i), Step::Found)
}

/// In-place edits needed before both sequences line up again, within the bounded lookahead.
fn step_modify(prev: &[Heading], cur: &[Heading], i: usize, j: usize) -> Step {
    let bound = (prev.len() - i - 1)
        .min(cur.len() - j - 1)
        .min(MODIFY_LOOKAHEAD);
    (1..=bound)
        .find(|&k| prev[i + k].same_entry(&cur[j + k]))
        .map_or(Step::Unbounded, Step::Found)
}

#[must_use]
/// Computes the edit script turning `prev` into `cur`.
///
/// At each mismatch the smallest of the add, remove and modify distances wins. Ties go to
/// remove, then add, then modify, so ambiguous edits read as deletions. This bias and the fixed
/// modify lookahead are stability heuristics, not optimality guarantees.
pub fn diff(prev: &[Heading], cur: &[Heading]) -> Vec<DiffOp> {
    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < prev.len() && j < cur.len() {
        if prev[i].same_entry(&cur[j]) {
            i += 1;
            j += 1;
            continue;
        }

        let add = step_add(prev, cur, i, j);
        let remove = step_remove(prev, cur, i, j);
        let modify = step_modify(prev, cur, i, j);

        if remove.rank() <= add.rank() && remove.rank() <= modify.rank() {
            let length = remove.len();
            ops.push(DiffOp::Remove { begin: i, length });
            i += length;
        } else if add.rank() <= modify.rank() {
            let length = add.len();
            ops.push(DiffOp::Add { begin: i, length });
            j += length;
        } else {
            let length = modify.len();
            let level_change = LevelChange::from_roles(has_child(prev, i), has_child(cur, j));
            ops.push(DiffOp::Modify {
                begin: i,
                length,
                level_change,
            });
            i += length;
            j += length;
        }
    }

    if i < prev.len() {
        ops.push(DiffOp::Remove {
            begin: i,
            length: prev.len() - i,
        });
    } else if j < cur.len() {
        ops.push(DiffOp::Add {
            begin: i,
            length: cur.len() - j,
        });
    }

    ops
}

#[cfg(test)]
#[path = "tests/diff.rs"]
mod tests;
