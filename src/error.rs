//! Errors raised at the I/O boundary: reading documents, parsing them, and persisting state.
//!
//! The outline core itself never fails; stale or inconsistent input is filtered, not reported.

use thiserror::Error;

#[derive(Debug, Error)]
/// Failures of the collaborators around the outline core.
pub enum Error {
    #[error("I/O error: {0}")]
    /// Reading or writing a file failed.
    Io(#[from] std::io::Error),
    #[error("state file error: {0}")]
    /// The persisted expansion state could not be encoded or decoded.
    Json(#[from] serde_json::Error),
    #[error("grammar error: {0}")]
    /// The tree-sitter grammar could not be loaded.
    Language(#[from] tree_sitter::LanguageError),
    #[error("heading query error: {0}")]
    /// A heading query does not compile against its grammar.
    Query(#[from] tree_sitter::QueryError),
    #[error("could not parse {0}")]
    /// The parser produced no syntax tree.
    Parse(String),
}

/// Result alias for fallible outline operations.
pub type Result<T> = std::result::Result<T, Error>;
