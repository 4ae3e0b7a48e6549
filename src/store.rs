//! Persisted expansion state, keyed by document path.
//!
//! Expansion survives closing and reopening a document: the outline writes its expanded keys
//! after changes and reads them back when the document is opened again.

use crate::error::Result;
use crate::tree::NodeKey;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Storage for each document's expanded node keys.
pub trait ExpansionStore {
    /// Saved keys for a document, `None` if nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self, document: &Path) -> Result<Option<Vec<NodeKey>>>;

    /// Replaces the saved keys for a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&mut self, document: &Path, keys: &[NodeKey]) -> Result<()>;
}

#[derive(Debug, Default)]
/// Store that keeps everything in memory, for sessions without a state file.
pub struct MemoryStore {
    entries: BTreeMap<PathBuf, Vec<NodeKey>>,
}

impl ExpansionStore for MemoryStore {
    fn load(&self, document: &Path) -> Result<Option<Vec<NodeKey>>> {
        Ok(self.entries.get(document).cloned())
    }

    fn save(&mut self, document: &Path, keys: &[NodeKey]) -> Result<()> {
        self.entries.insert(document.to_path_buf(), keys.to_vec());
        Ok(())
    }
}

/// Store backed by a JSON file mapping document paths to ordered key lists.
pub struct JsonStore {
    file: PathBuf,
    entries: BTreeMap<String, Vec<NodeKey>>,
}

impl JsonStore {
    #[must_use]
    /// Opens the state file, starting empty if it is missing or unreadable.
    pub fn open(file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        let entries = match fs::read_to_string(&file) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(file = %file.display(), error = %e, "ignoring corrupt outline state file");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self { file, entries }
    }

    #[must_use]
    /// Location of the state file.
    pub fn file(&self) -> &Path {
        &self.file
    }
}

impl ExpansionStore for JsonStore {
    fn load(&self, document: &Path) -> Result<Option<Vec<NodeKey>>> {
        let key = document.to_string_lossy().to_string();
        Ok(self.entries.get(&key).cloned())
    }

    fn save(&mut self, document: &Path, keys: &[NodeKey]) -> Result<()> {
        let key = document.to_string_lossy().to_string();
        self.entries.insert(key, keys.to_vec());
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.file, json)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/store.rs"]
mod tests;
