//! Document adapters the outline reads headings from and jumps back into.
//!
//! The outline state only ever talks to a [`Navigator`]; markdown files are one implementation,
//! and any other source (a canvas, a board, an embedded text view) plugs in the same way.

use crate::error::Result;
use crate::formats::markdown::MarkdownFormat;
use crate::heading::Heading;
use crate::input;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Where the editor should move its cursor or scroll to for a heading.
pub enum JumpTarget {
    /// A line/column location in the source text.
    Position {
        /// Zero-based line.
        line: usize,
        /// Zero-based column.
        column: usize,
    },
    /// An adapter-specific identifier for sources without line addressing.
    Id(String),
}

impl JumpTarget {
    #[must_use]
    /// Target for a heading: its external id when it has one, otherwise its start position.
    pub fn of(heading: &Heading) -> Self {
        match &heading.id {
            Some(id) => Self::Id(id.clone()),
            None => Self::Position {
                line: heading.position.start.line,
                column: heading.position.start.column,
            },
        }
    }
}

/// Capabilities the outline needs from a document source.
pub trait Navigator {
    /// Current headings of the document, in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or parsed.
    fn headings(&self) -> Result<Vec<Heading>>;

    /// Path identifying the document, also the key for persisted expansion state.
    fn path(&self) -> &Path;

    /// Level the outline expands to when this document is opened without saved state.
    fn default_level(&self) -> u8;

    /// Where to move the editor for the heading at `index` of `headings`.
    fn jump(&self, headings: &[Heading], index: usize) -> Option<JumpTarget> {
        headings.get(index).map(JumpTarget::of)
    }

    /// Moves the heading at `from` to sit before `to`. Returns `false` when unsupported.
    ///
    /// # Errors
    ///
    /// Returns an error if a supporting adapter fails to rewrite its source.
    fn handle_drop(&mut self, from: usize, to: usize) -> Result<bool> {
        let _ = (from, to);
        Ok(false)
    }
}

/// Navigator over a markdown file on disk, or markdown text held in memory.
pub struct MarkdownNavigator {
    path: PathBuf,
    text: Option<String>,
    default_level: u8,
}

impl MarkdownNavigator {
    #[must_use]
    /// Reads headings from the file at `path` on every refresh.
    pub fn open(path: impl Into<PathBuf>, default_level: u8) -> Self {
        Self {
            path: path.into(),
            text: None,
            default_level,
        }
    }

    #[must_use]
    /// Serves headings from in-memory text identified by `path`.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>, default_level: u8) -> Self {
        Self {
            path: path.into(),
            text: Some(text.into()),
            default_level,
        }
    }

    /// Replaces the in-memory text, as an editor buffer change would.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }
}

impl Navigator for MarkdownNavigator {
    fn headings(&self) -> Result<Vec<Heading>> {
        match &self.text {
            Some(text) => input::extract_headings(text, &MarkdownFormat),
            None => input::extract_file_headings(&self.path, &MarkdownFormat),
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn default_level(&self) -> u8 {
        self.default_level
    }
}

#[cfg(test)]
#[path = "tests/navigator.rs"]
mod tests;
