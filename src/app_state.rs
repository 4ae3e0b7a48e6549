//! The core state machine bridging a document's headings and the outline the user sees.
//!
//! An outline panel needs a single owner for everything that must stay consistent while the
//! document is edited underneath it: the current heading sequence, the tree built from it, which
//! nodes are expanded, and which heading the cursor is in. [`OutlineState`] is that owner. Host
//! editors feed it [`HostEvent`]s, it reconciles expansion across every reparse, and anything
//! rendering the outline subscribes to the [`StateEvent`]s it emits instead of polling.

use crate::config::Config;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::expand::{self, ExpandMode, ExpandedSet};
use crate::export::{stringify, Template};
use crate::filter::HeadingFilter;
use crate::heading::Heading;
use crate::locate::nearest_heading_before;
use crate::modify_keys::{calc_modifies, ModifyKeys};
use crate::navigator::{JumpTarget, Navigator};
use crate::store::ExpansionStore;
use crate::tree::{build_tree, is_leaf, NodeKey, Outline};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Notifications a host editor delivers to the outline.
pub enum HostEvent {
    /// The open document's text changed.
    DocumentChanged,
    /// The cursor or viewport moved to a byte offset.
    SelectionChanged {
        /// Byte offset of the cursor or top of the viewport.
        offset: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Changes the outline announces to its subscribers.
pub enum StateEvent {
    /// A different document was opened and all transient state was reset.
    DocumentOpened,
    /// Headings were reparsed; carries the migration that was applied.
    HeadingsChanged(ModifyKeys),
    /// The set of expanded nodes changed.
    ExpansionChanged,
    /// The located heading changed.
    Located(Option<usize>),
}

/// Callback receiving every [`StateEvent`].
pub type Subscriber = Box<dyn FnMut(&StateEvent)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One line of the outline as a renderer would draw it.
pub struct VisibleRow {
    /// Flat heading index.
    pub index: usize,
    /// Depth in the tree (0 for top-level nodes).
    pub depth: usize,
    /// Whether the node has children.
    pub expandable: bool,
    /// Whether the node is currently expanded.
    pub expanded: bool,
    /// Whether this is the heading the cursor is in.
    pub located: bool,
}

/// Owns a document's outline and keeps its UI state synchronised across edits.
///
/// # Lifecycle
///
/// ```text
/// open ──> [DocumentChanged]* ──> refresh ──> reconcile ──> persist
///   ^                                                          |
///   |___________________ open (next document) _________________|
/// ```
///
/// Opening a document resets everything synchronously before its headings are fetched, so a
/// diff is never computed against another document's headings. Change events are debounced:
/// the first in a burst refreshes at once, later ones collapse into a single trailing refresh
/// released by [`OutlineState::tick`]. Writes of the expansion state are debounced the same way.
pub struct OutlineState {
    /// Headings of the current document version.
    pub headings: Vec<Heading>,
    /// Tree built from `headings`.
    pub outline: Outline,
    /// Keys of expanded nodes, always valid for `headings`.
    pub expanded: ExpandedSet,
    /// Heading containing the cursor, if any.
    pub located: Option<usize>,
    /// Level used by the collapse-on-locate policy; set by [`OutlineState::switch_level`].
    pub current_level: u8,
    config: Config,
    navigator: Box<dyn Navigator>,
    store: Box<dyn ExpansionStore>,
    refresh: Debouncer<()>,
    persist: Debouncer<()>,
    subscribers: Vec<Subscriber>,
}

impl OutlineState {
    /// Creates the outline for `navigator`'s document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document's headings or saved state cannot be read.
    pub fn new(
        navigator: Box<dyn Navigator>,
        store: Box<dyn ExpansionStore>,
        config: Config,
    ) -> Result<Self> {
        let window = config.debounce();
        let mut state = Self {
            headings: Vec::new(),
            outline: Outline::default(),
            expanded: ExpandedSet::new(),
            located: None,
            current_level: navigator.default_level(),
            config,
            navigator,
            store,
            refresh: Debouncer::new(window),
            persist: Debouncer::new(window),
            subscribers: Vec::new(),
        };
        state.load()?;
        Ok(state)
    }

    /// Registers a callback for state changes.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StateEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&mut self, event: &StateEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    /// Switches to another document.
    ///
    /// Pending refreshes and writes for the previous document are dropped and every piece of
    /// transient state is cleared before the new headings are fetched. Expansion is restored
    /// from the store when saved, otherwise expanded to the navigator's default level.
    ///
    /// # Errors
    ///
    /// Returns an error if the new document's headings or saved state cannot be read.
    pub fn open(&mut self, navigator: Box<dyn Navigator>) -> Result<()> {
        if self.persist.cancel().is_some() {
            self.save()?;
        }
        self.refresh.cancel();
        self.headings.clear();
        self.outline = Outline::default();
        self.expanded.clear();
        self.located = None;
        self.current_level = navigator.default_level();
        self.navigator = navigator;
        self.load()
    }

    fn load(&mut self) -> Result<()> {
        self.headings = self.navigator.headings()?;
        self.outline = build_tree(&self.headings);
        self.expanded = match self.store.load(self.navigator.path())? {
            Some(keys) => expand::safe_filter(&keys.into_iter().collect(), &self.headings),
            None => expand::switch_level(&self.headings, self.current_level),
        };
        info!(
            path = %self.navigator.path().display(),
            headings = self.headings.len(),
            expanded = self.expanded.len(),
            "opened outline"
        );
        self.notify(&StateEvent::DocumentOpened);
        Ok(())
    }

    /// Feeds a host event into the outline.
    ///
    /// # Errors
    ///
    /// Returns an error if a triggered refresh cannot read the document or persist state.
    pub fn handle(&mut self, event: HostEvent, now: Instant) -> Result<()> {
        match event {
            HostEvent::DocumentChanged => {
                if self.refresh.trigger(now, ()).is_some() {
                    self.refresh(now)?;
                } else {
                    debug!("deferring outline refresh");
                }
            }
            HostEvent::SelectionChanged { offset } => {
                self.locate(offset, now)?;
            }
        }
        Ok(())
    }

    /// Runs whichever debounced refresh or write has come due.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or state cannot be persisted.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        if self.refresh.poll(now).is_some() {
            self.refresh(now)?;
        }
        if self.persist.poll(now).is_some() {
            self.save()?;
        }
        Ok(())
    }

    /// Reparses the document and migrates expansion and location onto the new headings.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or state cannot be persisted.
    pub fn refresh(&mut self, now: Instant) -> Result<()> {
        let headings = self.navigator.headings()?;
        let modify_keys = calc_modifies(&self.headings, &headings);
        let expanded = expand::safe_filter(
            &expand::reconcile(&self.expanded, &modify_keys, &headings),
            &headings,
        );

        let located = self
            .located
            .filter(|&i| !modify_keys.is_removed(i))
            .and_then(|i| modify_keys.translate(i))
            .filter(|&i| i < headings.len());
        self.headings = headings;
        self.outline = build_tree(&self.headings);

        self.notify(&StateEvent::HeadingsChanged(modify_keys));
        if located != self.located {
            self.located = located;
            self.notify(&StateEvent::Located(located));
        }
        self.set_expanded(expanded, now)
    }

    fn set_expanded(&mut self, expanded: ExpandedSet, now: Instant) -> Result<()> {
        if expanded == self.expanded {
            return Ok(());
        }
        self.expanded = expanded;
        self.notify(&StateEvent::ExpansionChanged);
        if self.persist.trigger(now, ()).is_some() {
            self.save()?;
        }
        Ok(())
    }

    /// Writes the expansion state immediately, dropping any pending debounced write.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn flush(&mut self) -> Result<()> {
        self.persist.cancel();
        self.save()
    }

    fn save(&mut self) -> Result<()> {
        let keys: Vec<NodeKey> = self.expanded.iter().copied().collect();
        self.store.save(self.navigator.path(), &keys)
    }

    /// Expands exactly the parent nodes at or above `level` and remembers it as current.
    ///
    /// # Errors
    ///
    /// Returns an error if the expansion state cannot be persisted.
    pub fn switch_level(&mut self, level: u8, now: Instant) -> Result<()> {
        self.current_level = level;
        let expanded = expand::switch_level(&self.headings, level);
        self.set_expanded(expanded, now)
    }

    /// Adds, removes or replaces expanded keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the expansion state cannot be persisted.
    pub fn modify_expand_keys(
        &mut self,
        keys: &[NodeKey],
        mode: ExpandMode,
        now: Instant,
    ) -> Result<()> {
        let expanded = expand::modify_expand_keys(&self.expanded, keys, mode, &self.headings);
        self.set_expanded(expanded, now)
    }

    /// Flips the expansion of the node at `index`. Leaves are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the expansion state cannot be persisted.
    pub fn toggle(&mut self, index: usize, now: Instant) -> Result<()> {
        let Some(key) = NodeKey::of(&self.headings, index) else {
            return Ok(());
        };
        let mode = if self.expanded.contains(&key) {
            ExpandMode::Remove
        } else {
            ExpandMode::Add
        };
        self.modify_expand_keys(&[key], mode, now)
    }

    /// Finds the heading containing `offset` and, when enabled, opens the path to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the expansion state cannot be persisted.
    pub fn locate(&mut self, offset: usize, now: Instant) -> Result<Option<usize>> {
        let located = nearest_heading_before(&self.headings, offset);
        if located != self.located {
            self.located = located;
            self.notify(&StateEvent::Located(located));
        }
        if let Some(index) = located.filter(|_| self.config.auto_expand) {
            let collapse_to = self.config.auto_collapse.then_some(self.current_level);
            let expanded = expand::auto_expand(&self.expanded, &self.headings, index, collapse_to);
            self.set_expanded(expanded, now)?;
        }
        Ok(located)
    }

    /// Where the editor should go for the heading at `index`; marks it as located.
    pub fn jump(&mut self, index: usize) -> Option<JumpTarget> {
        let target = self.navigator.jump(&self.headings, index)?;
        if self.located != Some(index) {
            self.located = Some(index);
            self.notify(&StateEvent::Located(self.located));
        }
        Some(target)
    }

    #[must_use]
    /// Renders the headings with `format`, or the configured export format.
    pub fn export(&self, format: Option<&str>) -> Vec<String> {
        let template = Template::parse(format.unwrap_or(&self.config.export_format));
        let path = self.navigator.path().to_string_lossy();
        stringify(&self.headings, &template, &path)
    }

    #[must_use]
    /// Indices of headings whose text matches `pattern` under the configured search mode.
    pub fn filter(&self, pattern: &str) -> Vec<usize> {
        let filter = HeadingFilter::new(pattern, self.config.regex_search);
        self.headings
            .iter()
            .enumerate()
            .filter(|(_, h)| filter.matches(&h.text))
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    /// The outline lines currently visible: top-level nodes plus children of expanded nodes.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        self.outline.walk(
            |node| self.expanded.contains(&node.key),
            |index, depth| {
                let key = self.outline.nodes[index].key;
                rows.push(VisibleRow {
                    index,
                    depth,
                    expandable: !is_leaf(&self.headings, index),
                    expanded: self.expanded.contains(&key),
                    located: self.located == Some(index),
                });
            },
        );
        rows
    }

    #[must_use]
    /// The navigator serving the current document.
    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
