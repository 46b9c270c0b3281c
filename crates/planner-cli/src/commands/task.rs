//! Task management commands for CLI.

use clap::Subcommand;
use planner_core::task::format_date;
use planner_core::{TaskDraft, TaskIcon, TaskPriority};

use super::{confirm, open_planner, parse_date_arg, today, CliResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Time as HH:MM
        #[arg(long)]
        time: Option<String>,
        /// high, medium or low (default: medium)
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Icon tag (e.g. Dumbbell, ShoppingCart)
        #[arg(long)]
        icon: Option<String>,
    },
    /// Update a task
    Edit {
        /// Task ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New date
        #[arg(long)]
        date: Option<String>,
        /// New time
        #[arg(long, conflicts_with = "no_time")]
        time: Option<String>,
        /// Remove the time
        #[arg(long)]
        no_time: bool,
        /// New priority
        #[arg(long)]
        priority: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New icon tag
        #[arg(long)]
        icon: Option<String>,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Toggle a task between pending and completed
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete every task (games are kept)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn parse_icon(tag: &str) -> Result<TaskIcon, String> {
    TaskIcon::ALL
        .iter()
        .copied()
        .find(|icon| icon.tag().eq_ignore_ascii_case(tag.trim()))
        .ok_or_else(|| {
            let known: Vec<&str> = TaskIcon::ALL.iter().map(TaskIcon::tag).collect();
            format!("unknown icon '{tag}', expected one of: {}", known.join(", "))
        })
}

pub fn run(action: TaskAction) -> CliResult {
    let (mut planner, _config) = open_planner()?;

    match action {
        TaskAction::Add {
            title,
            date,
            time,
            priority,
            description,
            icon,
        } => {
            let date = match date {
                Some(raw) => parse_date_arg(&raw)?,
                None => today(),
            };
            let mut draft = TaskDraft::new(title, format_date(date))
                .with_priority(priority.parse::<TaskPriority>()?);
            if let Some(time) = time {
                draft = draft.with_time(time);
            }
            if let Some(description) = description {
                draft = draft.with_description(description);
            }
            if let Some(icon) = icon {
                draft = draft.with_icon(parse_icon(&icon)?);
            }
            let task = planner.add_task(draft)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Edit {
            id,
            title,
            date,
            time,
            no_time,
            priority,
            description,
            icon,
        } => {
            let existing = planner
                .task(&id)
                .ok_or_else(|| format!("task not found: {id}"))?;
            let mut draft = TaskDraft::from_task(existing);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(raw) = date {
                draft.task_date = format_date(parse_date_arg(&raw)?);
            }
            if no_time {
                draft.task_time = None;
            } else if let Some(time) = time {
                draft.task_time = Some(time);
            }
            if let Some(priority) = priority {
                draft.priority = priority.parse::<TaskPriority>()?;
            }
            if let Some(description) = description {
                draft.description = Some(description).filter(|d| !d.is_empty());
            }
            if let Some(icon) = icon {
                draft = draft.with_icon(parse_icon(&icon)?);
            }
            let task = planner
                .update_task(&id, draft)?
                .ok_or_else(|| format!("task not found: {id}"))?;
            println!("Task updated: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Get { id } => {
            let task = planner
                .task(&id)
                .ok_or_else(|| format!("task not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(task)?);
        }
        TaskAction::Delete { id, yes } => {
            if planner.task(&id).is_none() {
                return Err(format!("task not found: {id}").into());
            }
            if !confirm("Delete this task?", yes)? {
                println!("aborted");
                return Ok(());
            }
            planner.delete_task(&id);
            println!("Task deleted: {id}");
        }
        TaskAction::Toggle { id } => {
            let completed = planner
                .toggle_task(&id)
                .ok_or_else(|| format!("task not found: {id}"))?;
            let state = if completed { "completed" } else { "pending" };
            println!("Task {id} is now {state}");
        }
        TaskAction::Clear { yes } => {
            if !confirm("Delete every task?", yes)? {
                println!("aborted");
                return Ok(());
            }
            planner.clear_tasks();
            println!("All tasks deleted");
        }
    }

    planner.shutdown();
    Ok(())
}
