//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides tree-sitter queries for parsing markdown documents
//! and extracting headings in both ATX (`#` syntax) and setext (underlined) style.

use crate::formats::Format;
use tree_sitter::Node;

/// Tree-sitter rules for ATX and setext markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading)] @heading"
    }

    fn heading_level(&self, node: Node<'_>) -> Option<u8> {
        let mut cursor = node.walk();
        let mut children = node.children(&mut cursor);
        children.find_map(|child| match child.kind() {
            "atx_h1_marker" | "setext_h1_underline" => Some(1),
            "atx_h2_marker" | "setext_h2_underline" => Some(2),
            "atx_h3_marker" => Some(3),
            "atx_h4_marker" => Some(4),
            "atx_h5_marker" => Some(5),
            "atx_h6_marker" => Some(6),
            _ => None,
        })
    }

    fn title_node<'tree>(&self, node: Node<'tree>) -> Option<Node<'tree>> {
        let mut cursor = node.walk();
        let title = node
            .children(&mut cursor)
            .find(|child| matches!(child.kind(), "inline" | "paragraph"));
        title
    }
}
