//! Ordering rules shared by the list view and every calendar view.
//!
//! Within a day:
//! 1. timed items before untimed ones, timed items by `HH:MM`
//! 2. tasks by priority rank (high first)
//! 3. tasks by `createdAt`, direction chosen by the caller
//! 4. tasks before games
//!
//! Merged listings put the date in front of those keys. All sorts are
//! stable, so fully tied items keep their input order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::item::{DisplayItem, ItemSource};
use crate::task::Task;

/// Direction of the final `createdAt` tie-break.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CreatedOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

impl CreatedOrder {
    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            CreatedOrder::OldestFirst => a.created_at.cmp(&b.created_at),
            CreatedOrder::NewestFirst => b.created_at.cmp(&a.created_at),
        }
    }
}

/// Compare two items assumed to share a day.
pub fn compare_within_day(a: &DisplayItem<'_>, b: &DisplayItem<'_>, order: CreatedOrder) -> Ordering {
    match (a.time, b.time) {
        (Some(ta), Some(tb)) => {
            let by_time = ta.cmp(tb);
            if by_time != Ordering::Equal {
                return by_time;
            }
        }
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        (None, None) => {}
    }

    match (&a.source, &b.source) {
        (ItemSource::Task(ta), ItemSource::Task(tb)) => ta
            .priority
            .rank()
            .cmp(&tb.priority.rank())
            .then_with(|| order.compare(ta, tb)),
        (ItemSource::Task(_), ItemSource::Game(_)) => Ordering::Less,
        (ItemSource::Game(_), ItemSource::Task(_)) => Ordering::Greater,
        (ItemSource::Game(_), ItemSource::Game(_)) => Ordering::Equal,
    }
}

/// Date first, then [`compare_within_day`].
pub fn compare_merged(a: &DisplayItem<'_>, b: &DisplayItem<'_>, order: CreatedOrder) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| compare_within_day(a, b, order))
}

pub fn sort_within_day(items: &mut [DisplayItem<'_>], order: CreatedOrder) {
    items.sort_by(|a, b| compare_within_day(a, b, order));
}

pub fn sort_merged(items: &mut [DisplayItem<'_>], order: CreatedOrder) {
    items.sort_by(|a, b| compare_merged(a, b, order));
}
