//! Bounded notification queue with delayed removal.
//!
//! A [`NotificationCenter`] is a cheap, cloneable handle over one shared
//! state. All mutations are synchronous and followed by a broadcast of the
//! visible list to every observer. Removal after dismissal is driven by
//! [`NotificationCenter::tick`]; no background timer exists.

use chrono::{DateTime, Duration, Utc};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::notification::{IdSequence, Notification, NotificationId, NotificationPatch, Toast};
use crate::delay::{deadline_after, millis, DelayedActions};

pub const DEFAULT_LIMIT: usize = 1;
pub const DEFAULT_REMOVE_DELAY_MS: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(&[Notification])>;

struct State {
    visible: Vec<Notification>,
    limit: usize,
    remove_delay: Duration,
    ids: IdSequence,
    removals: DelayedActions<NotificationId>,
}

#[derive(Default)]
struct Observers {
    next: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

#[derive(Clone)]
pub struct NotificationCenter {
    state: Rc<RefCell<State>>,
    observers: Rc<RefCell<Observers>>,
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("NotificationCenter")
            .field("visible", &state.visible)
            .field("limit", &state.limit)
            .field("pending_removals", &state.removals.len())
            .field("observers", &self.observers.borrow().entries.len())
            .finish()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_REMOVE_DELAY_MS)
    }
}

impl NotificationCenter {
    /// `limit` is the number of visible entries kept (at least one).
    pub fn new(limit: usize, remove_delay_ms: u64) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                visible: Vec::new(),
                limit: limit.max(1),
                remove_delay: millis(remove_delay_ms),
                ids: IdSequence::default(),
                removals: DelayedActions::new(),
            })),
            observers: Rc::new(RefCell::new(Observers::default())),
        }
    }

    #[cfg(test)]
    fn with_ids(self, ids: IdSequence) -> Self {
        self.state.borrow_mut().ids = ids;
        self
    }

    /// Show a new notification, evicting the oldest ones beyond the limit.
    pub fn enqueue(&self, toast: Toast) -> NotificationHandle {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.ids.next_id();
            state.visible.insert(0, Notification::open(id, toast));
            let keep = state.limit.min(state.visible.len());
            let evicted: Vec<NotificationId> = state.visible.drain(keep..).map(|n| n.id).collect();
            for old in &evicted {
                state.removals.cancel(old);
            }
            id
        };
        self.broadcast();
        NotificationHandle {
            id,
            center: self.clone(),
        }
    }

    /// Merge `patch` into the entry `id`. Unknown ids are ignored.
    pub fn update(&self, id: NotificationId, patch: NotificationPatch) {
        {
            let mut state = self.state.borrow_mut();
            if let Some(entry) = state.visible.iter_mut().find(|n| n.id == id) {
                entry.apply(&patch);
            }
        }
        self.broadcast();
    }

    /// Close one entry, or every entry when `id` is `None`, and schedule
    /// its removal. A repeated dismiss keeps the first deadline.
    pub fn dismiss(&self, id: Option<NotificationId>) {
        self.dismiss_at(id, Utc::now());
    }

    pub fn dismiss_at(&self, id: Option<NotificationId>, now: DateTime<Utc>) {
        {
            let mut state = self.state.borrow_mut();
            let at = deadline_after(now, state.remove_delay);
            let State {
                visible, removals, ..
            } = &mut *state;
            for entry in visible.iter_mut().filter(|n| id.map_or(true, |id| n.id == id)) {
                entry.open = false;
                removals.schedule(entry.id, at);
            }
        }
        self.broadcast();
    }

    /// Delete one entry, or all entries, immediately.
    pub fn remove(&self, id: Option<NotificationId>) {
        {
            let mut state = self.state.borrow_mut();
            match id {
                Some(id) => {
                    state.visible.retain(|n| n.id != id);
                    state.removals.cancel(&id);
                }
                None => {
                    state.visible.clear();
                    state.removals.clear();
                }
            }
        }
        self.broadcast();
    }

    /// Perform removals that are due. Returns how many entries were removed.
    pub fn tick(&self, now: DateTime<Utc>) -> usize {
        let removed = {
            let mut state = self.state.borrow_mut();
            let due = state.removals.take_due(now);
            let before = state.visible.len();
            state.visible.retain(|n| !due.contains(&n.id));
            before - state.visible.len()
        };
        if removed > 0 {
            self.broadcast();
        }
        removed
    }

    /// Snapshot of the visible entries, newest first.
    pub fn visible(&self) -> Vec<Notification> {
        self.state.borrow().visible.clone()
    }

    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.state.borrow().visible.iter().find(|n| n.id == id).cloned()
    }

    pub fn pending_removals(&self) -> usize {
        self.state.borrow().removals.len()
    }

    pub fn next_removal(&self) -> Option<DateTime<Utc>> {
        self.state.borrow().removals.next_deadline()
    }

    pub fn subscribe(&self, observer: impl Fn(&[Notification]) + 'static) -> SubscriptionId {
        let mut observers = self.observers.borrow_mut();
        observers.next += 1;
        let id = SubscriptionId(observers.next);
        observers.entries.push((id, Rc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.entries.len();
        observers.entries.retain(|(sub, _)| *sub != id);
        observers.entries.len() != before
    }

    /// Drop every observer and cancel every scheduled removal.
    pub fn shutdown(&self) {
        self.observers.borrow_mut().entries.clear();
        self.state.borrow_mut().removals.clear();
    }

    // Observers run with no borrow held, so they may call back into the
    // center or unsubscribe without affecting the current broadcast.
    fn broadcast(&self) {
        let snapshot = self.state.borrow().visible.clone();
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .entries
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(&snapshot);
        }
    }
}

/// Control over one enqueued notification.
#[derive(Debug, Clone)]
pub struct NotificationHandle {
    id: NotificationId,
    center: NotificationCenter,
}

impl NotificationHandle {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn update(&self, patch: NotificationPatch) {
        self.center.update(self.id, patch);
    }

    pub fn dismiss(&self) {
        self.center.dismiss(Some(self.id));
    }
}
