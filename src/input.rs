//! Reading documents from disk and extracting their headings.
//!
//! The extraction runs a format's tree-sitter heading query over the whole document and emits
//! one [`Heading`] per capture, already in document order.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::heading::{Heading, Point, Position};
use std::fs;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Expands the given paths into the document files to load.
///
/// Files are taken as given; directories are walked recursively for files whose extension is
/// one of `extensions`. The result is sorted and free of duplicates.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    let mut pending = paths;

    while let Some(path) = pending.pop() {
        if path.is_dir() {
            for entry in fs::read_dir(&path)? {
                pending.push(entry?.path());
            }
        } else if path.is_file() && has_extension(&path, extensions) {
            documents.push(path);
        }
    }

    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

fn point(position: tree_sitter::Point, offset: usize) -> Point {
    Point {
        line: position.row,
        column: position.column,
        offset,
    }
}

/// Extracts the headings of a document's text.
///
/// # Errors
///
/// Returns an error if the grammar or heading query cannot be loaded, or the parser gives up.
pub fn extract_headings(source: &str, format: &dyn Format) -> Result<Vec<Heading>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse("document".to_string()))?;

    let query = Query::new(&language, format.heading_query())?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());

    let mut headings = Vec::new();
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let Some(level) = format.heading_level(node) else {
                continue;
            };
            let text = format
                .title_node(node)
                .and_then(|title| title.utf8_text(source.as_bytes()).ok())
                .map(|title| title.trim().to_string())
                .unwrap_or_default();

            headings.push(Heading {
                text,
                level,
                position: Position {
                    start: point(node.start_position(), node.start_byte()),
                    end: point(node.end_position(), node.end_byte()),
                },
                id: None,
            });
        }
    }

    headings.sort_by_key(|h| h.position.start.offset);
    Ok(headings)
}

/// Reads a file and extracts its headings.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn extract_file_headings(path: &Path, format: &dyn Format) -> Result<Vec<Heading>> {
    let source = fs::read_to_string(path)?;
    extract_headings(&source, format).map_err(|e| match e {
        Error::Parse(_) => Error::Parse(path.display().to_string()),
        other => other,
    })
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
