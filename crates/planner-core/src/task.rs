//! User-owned tasks.
//!
//! Dates and times are kept as the strings the user (or the persisted
//! record) supplied. They are parsed on demand, so a record with a broken
//! `taskDate` still loads and is simply left out of every calendar view.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Task priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    /// Sort rank, lower sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            TaskPriority::High => 1,
            TaskPriority::Medium => 2,
            TaskPriority::Low => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(TaskPriority::High),
            "medium" => Ok(TaskPriority::Medium),
            "low" => Ok(TaskPriority::Low),
            _ => Err(ValidationError::UnknownPriority(s.to_string())),
        }
    }
}

/// Display glyph selectable for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskIcon {
    #[default]
    ClipboardPenLine,
    ShoppingCart,
    Utensils,
    Car,
    Users,
    Briefcase,
    Dumbbell,
    BookOpen,
    HomeIcon,
    DollarSign,
    Plane,
    Swords,
}

impl TaskIcon {
    pub const ALL: [TaskIcon; 12] = [
        TaskIcon::ClipboardPenLine,
        TaskIcon::ShoppingCart,
        TaskIcon::Utensils,
        TaskIcon::Car,
        TaskIcon::Users,
        TaskIcon::Briefcase,
        TaskIcon::Dumbbell,
        TaskIcon::BookOpen,
        TaskIcon::HomeIcon,
        TaskIcon::DollarSign,
        TaskIcon::Plane,
        TaskIcon::Swords,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            TaskIcon::ClipboardPenLine => "ClipboardPenLine",
            TaskIcon::ShoppingCart => "ShoppingCart",
            TaskIcon::Utensils => "Utensils",
            TaskIcon::Car => "Car",
            TaskIcon::Users => "Users",
            TaskIcon::Briefcase => "Briefcase",
            TaskIcon::Dumbbell => "Dumbbell",
            TaskIcon::BookOpen => "BookOpen",
            TaskIcon::HomeIcon => "HomeIcon",
            TaskIcon::DollarSign => "DollarSign",
            TaskIcon::Plane => "Plane",
            TaskIcon::Swords => "Swords",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TaskIcon::ClipboardPenLine => "Default (list)",
            TaskIcon::ShoppingCart => "Shopping",
            TaskIcon::Utensils => "Meal/food",
            TaskIcon::Car => "Transport/car",
            TaskIcon::Users => "Meeting/social",
            TaskIcon::Briefcase => "Work/office",
            TaskIcon::Dumbbell => "Exercise/sport",
            TaskIcon::BookOpen => "Study/reading",
            TaskIcon::HomeIcon => "Home/chores",
            TaskIcon::DollarSign => "Finance/money",
            TaskIcon::Plane => "Travel/vacation",
            TaskIcon::Swords => "Games/leisure",
        }
    }

    /// Resolve a stored tag, falling back to the default icon.
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|icon| icon.tag() == tag)
            .unwrap_or_default()
    }
}

/// A user-owned to-do item, in its persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    pub task_date: String,
    /// `HH:MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_time: Option<String>,
    pub priority: TaskPriority,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Task {
    /// Scheduled day, or `None` when `task_date` is not a valid date.
    pub fn scheduled_date(&self) -> Option<NaiveDate> {
        parse_date(&self.task_date)
    }

    /// Time of day, `None` when absent or blank.
    pub fn time(&self) -> Option<&str> {
        self.task_time
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn icon(&self) -> TaskIcon {
        self.icon
            .as_deref()
            .map(TaskIcon::from_tag)
            .unwrap_or_default()
    }
}

/// The user-editable part of a task, as entered in a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub task_date: String,
    #[serde(default)]
    pub task_time: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub icon: Option<String>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, task_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            task_date: task_date.into(),
            task_time: None,
            priority: TaskPriority::default(),
            icon: None,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.task_time = Some(time.into());
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: TaskIcon) -> Self {
        self.icon = Some(icon.tag().to_string());
        self
    }

    /// Copy the editable fields of an existing task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            task_date: task.task_date.clone(),
            task_time: task.task_time.clone(),
            priority: task.priority,
            icon: task.icon.clone(),
        }
    }

    /// Apply the form rules: title 1..=100 chars, description <= 500 chars,
    /// `YYYY-MM-DD` date, optional zero-padded 24h `HH:MM` time.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title_len = self.title.trim().chars().count();
        if title_len == 0 {
            return Err(ValidationError::EmptyTitle);
        }
        if title_len > MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong {
                len: title_len,
                max: MAX_TITLE_LEN,
            });
        }
        if let Some(description) = &self.description {
            let len = description.chars().count();
            if len > MAX_DESCRIPTION_LEN {
                return Err(ValidationError::DescriptionTooLong {
                    len,
                    max: MAX_DESCRIPTION_LEN,
                });
            }
        }
        if parse_date(&self.task_date).is_none() {
            return Err(ValidationError::InvalidDate(self.task_date.clone()));
        }
        match self.task_time.as_deref() {
            None | Some("") => {}
            Some(time) if is_valid_time(time) => {}
            Some(time) => return Err(ValidationError::InvalidTime(time.to_string())),
        }
        Ok(())
    }
}

/// Parse a zero-padded `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `true` for zero-padded 24h `HH:MM`.
pub fn is_valid_time(raw: &str) -> bool {
    raw.len() == 5 && NaiveTime::parse_from_str(raw, TIME_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TaskDraft {
        TaskDraft::new("Pay bills", "2025-06-02")
    }

    #[test]
    fn priority_rank_orders_high_first() {
        assert!(TaskPriority::High.rank() < TaskPriority::Medium.rank());
        assert!(TaskPriority::Medium.rank() < TaskPriority::Low.rank());
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<TaskPriority>().unwrap(), TaskPriority::High);
        assert_eq!(" low ".parse::<TaskPriority>().unwrap(), TaskPriority::Low);
        assert!("urgent".parse::<TaskPriority>().is_err());
    }

    #[test]
    fn parse_date_requires_zero_padding() {
        assert_eq!(parse_date(" 2025-06-07 "), NaiveDate::from_ymd_opt(2025, 6, 7));
        assert_eq!(parse_date("2025-6-7"), None);
    }

    #[test]
    fn unknown_icon_tag_falls_back_to_default() {
        assert_eq!(TaskIcon::from_tag("Rocket"), TaskIcon::ClipboardPenLine);
        assert_eq!(TaskIcon::from_tag("Car"), TaskIcon::Car);
    }

    #[test]
    fn task_serializes_with_camel_case_keys() {
        let task = Task {
            id: "t-1".to_string(),
            title: "Gym".to_string(),
            description: None,
            task_date: "2025-06-07".to_string(),
            task_time: Some("07:00".to_string()),
            priority: TaskPriority::Medium,
            completed: false,
            created_at: "2025-06-01T10:00:00Z".parse().unwrap(),
            icon: Some("Dumbbell".to_string()),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["taskDate"], "2025-06-07");
        assert_eq!(json["taskTime"], "07:00");
        assert_eq!(json["priority"], "medium");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn broken_date_still_deserializes() {
        let json = r#"{"id":"x","title":"t","taskDate":"not-a-date","priority":"low",
            "completed":false,"createdAt":"2025-06-01T10:00:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.scheduled_date().is_none());
        assert_eq!(task.icon(), TaskIcon::ClipboardPenLine);
    }

    #[test]
    fn blank_time_counts_as_none() {
        let mut task: Task = serde_json::from_str(
            r#"{"id":"x","title":"t","taskDate":"2025-06-01","priority":"low",
            "createdAt":"2025-06-01T10:00:00Z"}"#,
        )
        .unwrap();
        task.task_time = Some("  ".to_string());
        assert_eq!(task.time(), None);
    }

    #[test]
    fn validate_accepts_well_formed_draft() {
        assert!(draft().with_time("23:59").validate().is_ok());
        assert!(draft().with_time("").validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_and_long_titles() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::EmptyTitle));

        d.title = "x".repeat(101);
        assert_eq!(
            d.validate(),
            Err(ValidationError::TitleTooLong { len: 101, max: 100 })
        );
    }

    #[test]
    fn validate_rejects_long_description() {
        let d = draft().with_description("y".repeat(501));
        assert!(matches!(
            d.validate(),
            Err(ValidationError::DescriptionTooLong { len: 501, .. })
        ));
    }

    #[test]
    fn validate_rejects_bad_dates_and_times() {
        let mut d = draft();
        d.task_date = "2025-02-30".to_string();
        assert!(matches!(d.validate(), Err(ValidationError::InvalidDate(_))));

        for unpadded in ["2025-6-7", "2025-06-7", "2025-6-07"] {
            d.task_date = unpadded.to_string();
            assert!(
                matches!(d.validate(), Err(ValidationError::InvalidDate(_))),
                "{unpadded} should be rejected"
            );
        }

        for bad in ["24:00", "9:00", "12:60", "noon"] {
            let d = draft().with_time(bad);
            assert!(
                matches!(d.validate(), Err(ValidationError::InvalidTime(_))),
                "{bad} should be rejected"
            );
        }
    }
}
