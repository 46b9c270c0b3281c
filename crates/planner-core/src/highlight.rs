//! Transient highlight of the item the user just jumped to.

use chrono::{DateTime, Duration, Utc};

use crate::delay::{deadline_after, millis, DelayedActions};

pub const DEFAULT_CLEAR_AFTER_MS: u64 = 2000;

/// Last writer wins: setting a new highlight cancels the pending clear of
/// the previous one, so a stale clear can never wipe a newer highlight.
#[derive(Debug, Clone)]
pub struct Highlight {
    current: Option<String>,
    clear_after: Duration,
    clears: DelayedActions<String>,
}

impl Default for Highlight {
    fn default() -> Self {
        Self::new(DEFAULT_CLEAR_AFTER_MS)
    }
}

impl Highlight {
    pub fn new(clear_after_ms: u64) -> Self {
        Self {
            current: None,
            clear_after: millis(clear_after_ms),
            clears: DelayedActions::new(),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }

    pub fn set(&mut self, id: impl Into<String>, now: DateTime<Utc>) {
        let id = id.into();
        self.clears.clear();
        self.clears.schedule(id.clone(), deadline_after(now, self.clear_after));
        self.current = Some(id);
    }

    pub fn clear(&mut self) {
        self.clears.clear();
        self.current = None;
    }

    /// Clear the highlight when its timer is due. Returns `true` if it did.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let due = self.clears.take_due(now);
        match &self.current {
            Some(id) if due.contains(id) => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
