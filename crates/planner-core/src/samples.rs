//! Example tasks for a fresh planner.

use chrono::{Days, NaiveDate};

use crate::ordering::WeekStart;
use crate::task::{format_date, TaskDraft, TaskIcon, TaskPriority};

struct Sample {
    title: &'static str,
    description: &'static str,
    time: Option<&'static str>,
    priority: TaskPriority,
    icon: TaskIcon,
    /// Days after the first day of the week.
    day_offset: u64,
}

const SAMPLES: [Sample; 9] = [
    Sample {
        title: "Weekly planning meeting",
        description: "Go over the goals and priorities for the week.",
        time: Some("09:00"),
        priority: TaskPriority::High,
        icon: TaskIcon::Users,
        day_offset: 0,
    },
    Sample {
        title: "Buy groceries",
        description: "Milk, bread, eggs, fruit, vegetables.",
        time: Some("18:00"),
        priority: TaskPriority::Medium,
        icon: TaskIcon::ShoppingCart,
        day_offset: 1,
    },
    Sample {
        title: "Gym session",
        description: "Cardio and light weights.",
        time: Some("07:00"),
        priority: TaskPriority::Medium,
        icon: TaskIcon::Dumbbell,
        day_offset: 5,
    },
    Sample {
        title: "Interview the new product engineer",
        description: "Second round with the shortlisted candidate.",
        time: Some("14:00"),
        priority: TaskPriority::High,
        icon: TaskIcon::Briefcase,
        day_offset: 2,
    },
    Sample {
        title: "Call the mechanic",
        description: "Book the yearly car service.",
        time: Some("10:00"),
        priority: TaskPriority::High,
        icon: TaskIcon::Car,
        day_offset: 4,
    },
    Sample {
        title: "Plan a weekend trip",
        description: "Look up places to stay and things to do.",
        time: None,
        priority: TaskPriority::Low,
        icon: TaskIcon::Plane,
        day_offset: 3,
    },
    Sample {
        title: "Pay monthly bills",
        description: "Power, water, internet and rent.",
        time: Some("11:00"),
        priority: TaskPriority::High,
        icon: TaskIcon::DollarSign,
        day_offset: 0,
    },
    Sample {
        title: "Clean and tidy the house",
        description: "Living room and kitchen first.",
        time: None,
        priority: TaskPriority::Medium,
        icon: TaskIcon::HomeIcon,
        day_offset: 5,
    },
    Sample {
        title: "Pick this week's matches",
        description: "Make the calls and watch the games.",
        time: Some("17:00"),
        priority: TaskPriority::Low,
        icon: TaskIcon::Swords,
        day_offset: 6,
    },
];

/// Drafts for the example tasks, spread over the week containing `today`.
pub fn sample_drafts(today: NaiveDate, week_start: WeekStart) -> Vec<TaskDraft> {
    let first = week_start.week_of(today);
    SAMPLES
        .iter()
        .map(|sample| {
            let date = first
                .checked_add_days(Days::new(sample.day_offset))
                .unwrap_or(first);
            let draft = TaskDraft::new(sample.title, format_date(date))
                .with_description(sample.description)
                .with_priority(sample.priority)
                .with_icon(sample.icon);
            match sample.time {
                Some(time) => draft.with_time(time),
                None => draft,
            }
        })
        .collect()
}
