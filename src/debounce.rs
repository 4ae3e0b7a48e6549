//! Single-slot debouncing for bursts of document events.
//!
//! Typing produces a change event per keystroke, but diffing and persisting only need to happen
//! once per burst. A [`Debouncer`] runs the first trigger of a burst straight away (leading
//! edge), parks later triggers in one slot where each newer one replaces the last, and releases
//! the parked task once the window has passed. Time is passed in by the caller so the schedule
//! is deterministic.

use std::time::{Duration, Instant};

#[derive(Debug)]
/// Leading-edge debouncer with one pending slot.
pub struct Debouncer<T> {
    window: Duration,
    last_fired: Option<Instant>,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    #[must_use]
    /// Creates an idle debouncer with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
            pending: None,
        }
    }

    fn ready(&self, now: Instant) -> bool {
        self.last_fired
            .is_none_or(|fired| now.saturating_duration_since(fired) >= self.window)
    }

    /// Schedules `task`. Returns it immediately when no task ran within the window; otherwise
    /// parks it, superseding any task already parked.
    pub fn trigger(&mut self, now: Instant, task: T) -> Option<T> {
        if self.pending.is_none() && self.ready(now) {
            self.last_fired = Some(now);
            Some(task)
        } else {
            self.pending = Some(task);
            None
        }
    }

    /// Releases the parked task once the window since the last run has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.is_some() && self.ready(now) {
            self.last_fired = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops any parked task and forgets the last run, returning the debouncer to idle.
    pub fn cancel(&mut self) -> Option<T> {
        self.last_fired = None;
        self.pending.take()
    }

    #[must_use]
    /// Whether a task is parked.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    /// The debounce window.
    pub fn window(&self) -> Duration {
        self.window
    }
}

#[cfg(test)]
#[path = "tests/debounce.rs"]
mod tests;
