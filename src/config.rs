//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an outliner.toml, and if present we load settings from there.
//! This provides debounce timing, expansion policy, search and export preferences.

use facet::Facet;
use std::fs;
use std::time::Duration;
use tracing::warn;

#[derive(Facet, Clone)]
/// User preferences loaded from outliner.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 300)]
    /// Milliseconds of quiet before a burst of edits is reconciled again.
    pub debounce_ms: u64,
    #[facet(default = 1)]
    /// Deepest level expanded when a document is opened without saved state.
    pub default_level: u8,
    #[facet(default = true)]
    /// Open the path to the heading under the cursor as it moves.
    pub auto_expand: bool,
    #[facet(default = false)]
    /// Collapse everything below the current level before opening the cursor's path.
    pub auto_collapse: bool,
    #[facet(default = false)]
    /// Treat search patterns as regular expressions instead of plain text.
    pub regex_search: bool,
    #[facet(default = "{bullet} {title}".to_string())]
    /// Template used when exporting or copying the outline.
    pub export_format: String,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = ".outliner-state.json".to_string())]
    /// JSON file holding per-document expansion state.
    pub state_file: String,
}

impl Config {
    #[must_use]
    /// Load configuration from outliner.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("outliner.toml") {
            if let Some(config) = Self::from_toml(&contents) {
                return config;
            }
            warn!("ignoring invalid outliner.toml");
        }
        Self::from_toml("").unwrap()
    }

    #[must_use]
    /// Parse configuration from TOML text, filling unset fields with defaults.
    pub fn from_toml(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }

    #[must_use]
    /// The debounce window as a duration.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
