//! Notification entries and their id sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ids wrap around at this bound instead of overflowing.
pub const ID_BOUND: u64 = (1 << 53) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic counter modulo [`ID_BOUND`].
#[derive(Debug, Clone, Default)]
pub(crate) struct IdSequence {
    count: u64,
}

impl IdSequence {
    #[cfg(test)]
    pub(crate) fn starting_at(count: u64) -> Self {
        Self { count }
    }

    pub(crate) fn next_id(&mut self) -> NotificationId {
        self.count = (self.count + 1) % ID_BOUND;
        NotificationId(self.count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// Content of a notification before it is enqueued.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Toast {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Variant,
}

impl Toast {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = Variant::Destructive;
        self
    }
}

/// An enqueued notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Variant,
    pub open: bool,
}

impl Notification {
    pub(crate) fn open(id: NotificationId, toast: Toast) -> Self {
        Self {
            id,
            title: toast.title,
            description: toast.description,
            variant: toast.variant,
            open: true,
        }
    }

    pub(crate) fn apply(&mut self, patch: &NotificationPatch) {
        if let Some(title) = &patch.title {
            self.title = Some(title.clone());
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(variant) = patch.variant {
            self.variant = variant;
        }
        if let Some(open) = patch.open {
            self.open = open;
        }
    }
}

/// Fields to merge into an existing notification. `None` leaves a field as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Option<Variant>,
    pub open: Option<bool>,
}

impl NotificationPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_monotonically() {
        let mut ids = IdSequence::default();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_eq!(a.value(), 1);
        assert_eq!(b.value(), 2);
    }

    #[test]
    fn ids_wrap_at_bound() {
        let mut ids = IdSequence::starting_at(ID_BOUND - 2);
        assert_eq!(ids.next_id().value(), ID_BOUND - 1);
        assert_eq!(ids.next_id().value(), 0);
        assert_eq!(ids.next_id().value(), 1);
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let mut n = Notification::open(
            NotificationId(7),
            Toast::titled("Task added").with_description("\"Gym\" was added"),
        );
        n.apply(&NotificationPatch::default().description("edited"));
        assert_eq!(n.title.as_deref(), Some("Task added"));
        assert_eq!(n.description.as_deref(), Some("edited"));
        assert_eq!(n.variant, Variant::Default);
        assert!(n.open);
    }
}
