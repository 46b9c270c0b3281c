//! Priority and completion filters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::task::{Task, TaskPriority};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl PriorityFilter {
    pub fn matches(&self, priority: TaskPriority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::High => priority == TaskPriority::High,
            PriorityFilter::Medium => priority == TaskPriority::Medium,
            PriorityFilter::Low => priority == TaskPriority::Low,
        }
    }
}

impl From<TaskPriority> for PriorityFilter {
    fn from(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::High => PriorityFilter::High,
            TaskPriority::Medium => PriorityFilter::Medium,
            TaskPriority::Low => PriorityFilter::Low,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(PriorityFilter::All);
        }
        s.parse::<TaskPriority>().map(PriorityFilter::from)
    }
}

/// Which tasks a view admits. Games carry neither priority nor completion
/// state and are never affected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ItemFilter {
    #[serde(default)]
    pub priority: PriorityFilter,
    #[serde(default)]
    pub include_completed: bool,
}

impl ItemFilter {
    /// Every priority, pending tasks only.
    pub fn pending() -> Self {
        Self::default()
    }

    /// Every priority, completed tasks included.
    pub fn everything() -> Self {
        Self {
            priority: PriorityFilter::All,
            include_completed: true,
        }
    }

    pub fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    pub fn including_completed(mut self, include: bool) -> Self {
        self.include_completed = include;
        self
    }

    /// Completion and priority check. Dates are checked by the agenda.
    pub fn admits(&self, task: &Task) -> bool {
        if task.completed && !self.include_completed {
            return false;
        }
        self.priority.matches(task.priority)
    }
}
