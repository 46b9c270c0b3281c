//! Transient user notifications ("toasts").

mod center;
mod notification;

pub use center::{
    NotificationCenter, NotificationHandle, SubscriptionId, DEFAULT_LIMIT, DEFAULT_REMOVE_DELAY_MS,
};
pub use notification::{Notification, NotificationId, NotificationPatch, Toast, Variant, ID_BOUND};
