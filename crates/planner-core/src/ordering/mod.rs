//! Event ordering engine.
//!
//! Turns a snapshot of tasks and game events into filtered, ordered
//! listings for a day, week or month. The list view and all three
//! calendar granularities go through the same [`Agenda`] so they always
//! agree on order.

mod agenda;
mod filter;
mod item;
mod sort;
mod window;

pub use agenda::{Agenda, DaySchedule};
pub use filter::{ItemFilter, PriorityFilter};
pub use item::{DisplayItem, ItemSource};
pub use sort::{compare_merged, compare_within_day, sort_merged, sort_within_day, CreatedOrder};
pub use window::{ViewMode, WeekStart, Window};
