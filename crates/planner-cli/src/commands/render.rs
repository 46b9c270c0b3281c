//! Plain-text rendering of listings.

use planner_core::ordering::{DaySchedule, DisplayItem, ItemSource};
use planner_core::Task;

/// Split `items` into the part shown inline and the number hidden behind
/// "+k more". A cap of zero shows everything.
pub fn inline<'i, 'a>(items: &'i [DisplayItem<'a>], cap: usize) -> (&'i [DisplayItem<'a>], usize) {
    if cap == 0 || items.len() <= cap {
        (items, 0)
    } else {
        (&items[..cap], items.len() - cap)
    }
}

pub fn item_line(item: &DisplayItem<'_>) -> String {
    let time = item.time.unwrap_or("--:--");
    match item.source {
        ItemSource::Task(task) => {
            let done = if task.completed { " (done)" } else { "" };
            format!(
                "{time}  [{}] {}{done}  ({})",
                task.priority, item.title, item.id
            )
        }
        ItemSource::Game(game) => {
            format!("{time}  [game] {}  ({})", item.title, game.tournament)
        }
    }
}

pub fn task_line(task: &Task) -> String {
    let time = task.time().unwrap_or("--:--");
    format!(
        "{} {time}  [{}] {}  ({})",
        task.task_date, task.priority, task.title, task.id
    )
}

/// Day heading followed by its items, capped at `cap` entries.
pub fn day_block(day: &DaySchedule<'_>, cap: usize) -> Vec<String> {
    let mut lines = vec![day.date.format("%a %Y-%m-%d").to_string()];
    let (shown, hidden) = inline(&day.items, cap);
    lines.extend(shown.iter().map(|item| format!("  {}", item_line(item))));
    if hidden > 0 {
        lines.push(format!("  +{hidden} more"));
    }
    lines
}
