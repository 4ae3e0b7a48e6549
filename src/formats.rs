//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different
//! document formats by providing the tree-sitter grammar and heading query
//! specific to each format, plus how to read a level and a title off a
//! matched heading node.

use tree_sitter::Node;

pub mod markdown;

/// Grammar and heading extraction rules for one document format.
pub trait Format {
    /// Tree-sitter grammar used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;

    /// Query whose `@heading` captures are the heading nodes, in document order.
    fn heading_query(&self) -> &str;

    /// Nesting level of a captured heading node, `None` to skip it.
    fn heading_level(&self, node: Node<'_>) -> Option<u8>;

    /// The node holding the heading's title text.
    fn title_node<'tree>(&self, node: Node<'tree>) -> Option<Node<'tree>>;
}
