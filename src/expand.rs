//! Keeps the set of expanded outline nodes consistent with a changing heading sequence.
//!
//! The expansion set is the only piece of outline UI state that survives a reparse. After every
//! edit the old keys are migrated through [`ModifyKeys`] so that expanded sections stay open,
//! deleted ones disappear, and freshly inserted headings are revealed. Separate operations
//! replace the set by level, apply explicit set algebra, or open the path to a located heading.

use crate::diff::LevelChange;
use crate::heading::Heading;
use crate::locate::ancestor_path;
use crate::modify_keys::ModifyKeys;
use crate::tree::{is_leaf, NodeKey};
use std::collections::BTreeSet;
use tracing::debug;

/// Keys of currently expanded outline nodes, iterated in document order.
pub type ExpandedSet = BTreeSet<NodeKey>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How an explicit list of keys combines with the current expansion set.
pub enum ExpandMode {
    /// Union the keys in.
    Add,
    /// Take the keys out.
    Remove,
    /// Use exactly the given keys.
    Replace,
}

/// Re-keys `index` against the new sequence, picking up the heading's current level.
fn rekey(headings: &[Heading], index: usize, fallback_level: u8) -> NodeKey {
    NodeKey::new(
        headings.get(index).map_or(fallback_level, |h| h.level),
        index,
    )
}

#[must_use]
/// Migrates an expansion set across one diff.
///
/// In order: keys inside deleted ranges are dropped; keys of parents that became leaves are
/// dropped; survivors are shifted to their new index and re-levelled from the new sequence;
/// leaves that gained children are expanded; and every insertion point opens its ancestors
/// (including itself only when it has children of its own).
pub fn reconcile(
    expanded: &ExpandedSet,
    modify_keys: &ModifyKeys,
    headings: &[Heading],
) -> ExpandedSet {
    let mut next = ExpandedSet::new();

    for key in expanded {
        if modify_keys.is_removed(key.index) {
            continue;
        }
        if modify_keys
            .modify_at(key.index)
            .is_some_and(|m| m.level_change_type == LevelChange::Parent2Child)
        {
            continue;
        }
        let Some(index) = modify_keys.translate(key.index) else {
            continue;
        };
        next.insert(rekey(headings, index, key.level));
    }

    for modify in &modify_keys.modifies {
        if modify.level_change_type == LevelChange::Child2Parent {
            next.insert(rekey(headings, modify.new_begin, 0));
        }
    }

    for add in &modify_keys.adds {
        let mut path = ancestor_path(headings, add.begin);
        if is_leaf(headings, add.begin) {
            path.retain(|&i| i != add.begin);
        }
        next.extend(path.into_iter().filter_map(|i| NodeKey::of(headings, i)));
    }

    debug!(
        before = expanded.len(),
        after = next.len(),
        "reconciled expanded outline keys"
    );
    next
}

#[must_use]
/// Drops keys that point past the end of the sequence or at a node that cannot be expanded.
pub fn safe_filter(expanded: &ExpandedSet, headings: &[Heading]) -> ExpandedSet {
    expanded
        .iter()
        .filter(|key| key.index < headings.len() && !is_leaf(headings, key.index))
        .copied()
        .collect()
}

#[must_use]
/// Expands exactly the parent nodes at or above `level`.
pub fn switch_level(headings: &[Heading], level: u8) -> ExpandedSet {
    headings
        .iter()
        .enumerate()
        .filter(|&(i, h)| h.level <= level && !is_leaf(headings, i))
        .map(|(i, h)| NodeKey::new(h.level, i))
        .collect()
}

#[must_use]
/// Applies explicit set algebra to the expansion set, then drops anything unexpandable.
pub fn modify_expand_keys(
    expanded: &ExpandedSet,
    keys: &[NodeKey],
    mode: ExpandMode,
    headings: &[Heading],
) -> ExpandedSet {
    let next = match mode {
        ExpandMode::Add => expanded.iter().chain(keys).copied().collect(),
        ExpandMode::Remove => expanded
            .iter()
            .filter(|key| !keys.contains(key))
            .copied()
            .collect(),
        ExpandMode::Replace => keys.iter().copied().collect(),
    };
    safe_filter(&next, headings)
}

#[must_use]
/// Opens the path to the heading at `index`.
///
/// With `collapse_to` set, everything deeper than that level is collapsed first, leaving only
/// the breadcrumb to the located heading open beneath it.
pub fn auto_expand(
    expanded: &ExpandedSet,
    headings: &[Heading],
    index: usize,
    collapse_to: Option<u8>,
) -> ExpandedSet {
    let mut next = match collapse_to {
        Some(level) => switch_level(headings, level),
        None => expanded.clone(),
    };
    next.extend(
        ancestor_path(headings, index)
            .into_iter()
            .filter_map(|i| NodeKey::of(headings, i)),
    );
    safe_filter(&next, headings)
}

#[cfg(test)]
#[path = "tests/expand.rs"]
mod tests;
