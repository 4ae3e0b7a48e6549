//! Heading representation shared by every stage of the outline pipeline.
//!
//! A heading is one structural marker in a document, carrying its literal text, its nesting
//! depth, and the source coordinates needed to jump back to it or to locate it from a cursor.
//! Sequences of headings are produced once per document version and replaced wholesale on the
//! next parse; nothing downstream mutates them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// A single coordinate in the source text.
pub struct Point {
    /// Zero-based line number.
    pub line: usize,
    /// Zero-based column (byte column within the line).
    pub column: usize,
    /// Byte offset from the start of the document.
    pub offset: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Start and end coordinates of a heading in its source.
pub struct Position {
    /// Where the heading begins.
    pub start: Point,
    /// Where the heading ends (exclusive).
    pub end: Point,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One heading occurrence in document order.
pub struct Heading {
    /// Literal heading content as written in the source, without markup symbols.
    pub text: String,
    /// Nesting depth, 1 (shallowest) to 6.
    pub level: u8,
    /// Source coordinates used for jump-to and locate-by-cursor.
    pub position: Position,
    /// External identifier for sources that are not line-addressable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Heading {
    #[must_use]
    /// Creates a heading with no source position, mostly useful for tests and synthetic outlines.
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            level,
            position: Position::default(),
            id: None,
        }
    }

    #[must_use]
    /// Returns this heading placed at the given position.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    /// Two headings are the same outline entry when both text and level agree.
    pub fn same_entry(&self, other: &Self) -> bool {
        self.level == other.level && self.text == other.text
    }
}
