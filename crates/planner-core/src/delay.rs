//! Id-keyed delayed actions.
//!
//! Nothing here spawns a thread or a timer. Owners record deadlines and
//! call [`DelayedActions::take_due`] from their own `tick`, which keeps
//! cancellation explicit: a key that was cancelled or cleared can never
//! fire later.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;

/// `ms` as a [`Duration`], saturating at the largest representable delay.
pub fn millis(ms: u64) -> Duration {
    i64::try_from(ms)
        .ok()
        .and_then(Duration::try_milliseconds)
        .unwrap_or(Duration::MAX)
}

/// `now + delay`, saturating instead of overflowing.
pub fn deadline_after(now: DateTime<Utc>, delay: Duration) -> DateTime<Utc> {
    now.checked_add_signed(delay)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[derive(Debug, Clone)]
pub struct DelayedActions<K> {
    pending: HashMap<K, DateTime<Utc>>,
}

impl<K> Default for DelayedActions<K> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> DelayedActions<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire at `at`.
    ///
    /// Returns `false` and keeps the existing deadline when `key` is
    /// already pending.
    pub fn schedule(&mut self, key: K, at: DateTime<Utc>) -> bool {
        if self.pending.contains_key(&key) {
            return false;
        }
        self.pending.insert(key, at);
        true
    }

    /// Schedule `key`, replacing any pending deadline.
    pub fn reschedule(&mut self, key: K, at: DateTime<Utc>) {
        self.pending.insert(key, at);
    }

    pub fn cancel(&mut self, key: &K) -> bool {
        self.pending.remove(key).is_some()
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    pub fn deadline(&self, key: &K) -> Option<DateTime<Utc>> {
        self.pending.get(key).copied()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.values().min().copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every key due at `now`, earliest deadline first.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<K> {
        let mut due: Vec<(K, DateTime<Utc>)> = Vec::new();
        self.pending.retain(|key, at| {
            if *at <= now {
                due.push((key.clone(), *at));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(_, at)| *at);
        due.into_iter().map(|(key, _)| key).collect()
    }

    /// Cancel everything.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
