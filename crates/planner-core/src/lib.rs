//! # Planner Core Library
//!
//! Core logic for a personal weekly planner that merges user tasks with a
//! catalog of sports game events. The `planner` CLI is a thin presentation
//! layer over this crate.
//!
//! ## Architecture
//!
//! - **Ordering**: filters tasks and games into day, week and month windows
//!   and sorts them into one deterministic display order
//! - **Notifications**: a bounded, observable toast queue whose removals are
//!   deadlines drained by `tick()`
//! - **Storage**: key-value slots holding the task list and game catalog as
//!   JSON, plus TOML configuration
//! - **Planner**: view state, selection highlight and confirmation toasts
//!   around the stores
//!
//! ## Key Components
//!
//! - [`Agenda`]: ordering queries over borrowed tasks and games
//! - [`NotificationCenter`]: toast queue with observers
//! - [`TaskStore`]: persisted task list
//! - [`Planner`]: application facade
//! - [`Config`]: application configuration management

pub mod delay;
pub mod error;
pub mod game;
pub mod highlight;
pub mod notify;
pub mod ordering;
pub mod planner;
pub mod samples;
pub mod storage;
pub mod task;

pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use game::{default_games, GameEvent};
pub use highlight::Highlight;
pub use notify::{Notification, NotificationCenter, NotificationId, NotificationPatch, Toast, Variant};
pub use ordering::{
    Agenda, DaySchedule, DisplayItem, ItemFilter, ItemSource, PriorityFilter, ViewMode, WeekStart,
    Window,
};
pub use planner::{Direction, Planner, ViewState};
pub use storage::{data_dir, Config, FileStore, GameStore, KeyValueStore, MemoryStore, TaskStore};
pub use task::{Task, TaskDraft, TaskIcon, TaskPriority};
