//! outliner: live document outlines that keep their expansion state across edits.
//!
//! Headings are extracted from a document after every edit. Rather than rebuilding the outline
//! from scratch (and collapsing everything the user had opened), each new heading sequence is
//! diffed against the previous one and the set of expanded nodes is migrated onto the new tree.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod debounce;
pub mod diff;
pub mod error;
pub mod expand;
pub mod export;
pub mod filter;
pub mod formats;
pub mod heading;
pub mod input;
pub mod locate;
pub mod modify_keys;
pub mod navigator;
pub mod store;
pub mod tree;

pub use error::{Error, Result};
