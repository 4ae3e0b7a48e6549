//! Turns a flat, leveled heading sequence into the hierarchy the outline renders.
//!
//! Nodes live in an arena indexed by their flat position so that the flat sequence, the tree and
//! the persisted expansion set can all be joined on the same index. Each node is addressed by a
//! [`NodeKey`] derived from its level and index. Keys are re-derived on every rebuild, so they
//! are never valid across two different heading sequences without translation.

use crate::heading::Heading;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier of an outline node, written as `item-<level>-<index>`.
///
/// Ordering is by flat index first so that sets of keys iterate in document order.
pub struct NodeKey {
    /// Flat index of the heading in its sequence.
    pub index: usize,
    /// Heading level at the time the key was derived.
    pub level: u8,
}

impl NodeKey {
    #[must_use]
    /// Builds the key for a heading at `index` with `level`.
    pub fn new(level: u8, index: usize) -> Self {
        Self { index, level }
    }

    #[must_use]
    /// Key of the heading at `index`, if the sequence reaches that far.
    pub fn of(headings: &[Heading], index: usize) -> Option<Self> {
        headings.get(index).map(|h| Self::new(h.level, index))
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}-{}", self.level, self.index)
    }
}

#[derive(Debug, PartialEq, Eq)]
/// A string that does not follow the `item-<level>-<index>` layout.
pub struct ParseNodeKeyError(String);

impl fmt::Display for ParseNodeKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid node key: {:?}", self.0)
    }
}

impl std::error::Error for ParseNodeKeyError {}

impl FromStr for NodeKey {
    type Err = ParseNodeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseNodeKeyError(s.to_string());
        let rest = s.strip_prefix("item-").ok_or_else(invalid)?;
        let (level, index) = rest.split_once('-').ok_or_else(invalid)?;
        Ok(Self {
            level: level.parse().map_err(|_| invalid())?,
            index: index.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for NodeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[must_use]
/// Whether the heading at `index` has no children and so cannot be expanded.
///
/// A heading is a leaf when it is the last one, or when the next heading is at the same or a
/// shallower level. Out-of-range indices count as leaves.
pub fn is_leaf(headings: &[Heading], index: usize) -> bool {
    match (headings.get(index), headings.get(index + 1)) {
        (Some(current), Some(next)) => next.level <= current.level,
        _ => true,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One node of the outline hierarchy.
pub struct OutlineNode {
    /// Identifier joining this node to the expansion set.
    pub key: NodeKey,
    /// Display label (the heading text).
    pub label: String,
    /// Index of the containing node, `None` for top-level nodes.
    pub parent: Option<usize>,
    /// Indices of directly nested nodes, in document order.
    pub children: Vec<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Arena-backed outline tree. Node `i` corresponds to heading `i`.
pub struct Outline {
    /// All nodes in flat document order.
    pub nodes: Vec<OutlineNode>,
    /// Indices of the top-level forest.
    pub roots: Vec<usize>,
}

impl Outline {
    #[must_use]
    /// Number of nodes in the outline.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    /// Whether the outline has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    /// Node at a flat index.
    pub fn get(&self, index: usize) -> Option<&OutlineNode> {
        self.nodes.get(index)
    }

    /// Walks the tree depth-first, visiting only children of nodes accepted by `descend`.
    ///
    /// The callback receives each visited index together with its depth in the tree.
    pub fn walk(
        &self,
        mut descend: impl FnMut(&OutlineNode) -> bool,
        mut visit: impl FnMut(usize, usize),
    ) {
        let mut stack: Vec<(usize, usize)> = self.roots.iter().rev().map(|&i| (i, 0)).collect();
        while let Some((index, depth)) = stack.pop() {
            visit(index, depth);
            let node = &self.nodes[index];
            if descend(node) {
                stack.extend(node.children.iter().rev().map(|&c| (c, depth + 1)));
            }
        }
    }
}

#[must_use]
/// Builds the outline hierarchy in a single pass over the headings.
///
/// Uses a stack of open ancestors seeded with a sentinel at level -1: each heading pops every
/// ancestor at the same or a deeper level, becomes a child of whatever remains on top, and is
/// then pushed itself. Skipped levels (a level 3 right after a level 1) simply nest directly.
pub fn build_tree(headings: &[Heading]) -> Outline {
    let mut outline = Outline {
        nodes: Vec::with_capacity(headings.len()),
        roots: Vec::new(),
    };
    // (node index, level); `None` is the sentinel root.
    let mut stack: Vec<(Option<usize>, i16)> = vec![(None, -1)];

    for (index, heading) in headings.iter().enumerate() {
        let level = i16::from(heading.level);
        while stack.last().is_some_and(|&(_, top)| top >= level) {
            stack.pop();
        }
        let parent = stack.last().and_then(|&(node, _)| node);

        outline.nodes.push(OutlineNode {
            key: NodeKey::new(heading.level, index),
            label: heading.text.clone(),
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(p) => outline.nodes[p].children.push(index),
            None => outline.roots.push(index),
        }
        stack.push((Some(index), level));
    }

    outline
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
