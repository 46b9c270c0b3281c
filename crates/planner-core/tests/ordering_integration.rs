//! Integration tests for the ordering engine.
//!
//! Every listing (day, week, month, pending list) goes through the same
//! agenda, so these tests check the full order produced for mixed inputs.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use planner_core::ordering::{Agenda, ItemFilter, PriorityFilter, WeekStart, Window};
use planner_core::{GameEvent, Task, TaskPriority};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn created(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_748_700_000 + secs, 0).unwrap()
}

fn task(id: &str, day: &str, time: Option<&str>, priority: TaskPriority, secs: i64) -> Task {
    Task {
        id: id.to_string(),
        title: id.to_string(),
        description: None,
        task_date: day.to_string(),
        task_time: time.map(str::to_string),
        priority,
        completed: false,
        created_at: created(secs),
        icon: None,
    }
}

fn game(id: &str, day: &str, time: &str) -> GameEvent {
    GameEvent {
        id: id.to_string(),
        team_name: "FURIA".to_string(),
        opponent: "TBD".to_string(),
        date: day.to_string(),
        time: time.to_string(),
        tournament: "Major".to_string(),
        betting_link: None,
    }
}

fn ids<'a>(items: impl IntoIterator<Item = &'a planner_core::DisplayItem<'a>>) -> Vec<&'a str> {
    items.into_iter().map(|item| item.id).collect()
}

#[test]
fn test_single_day_scenario() {
    let tasks = vec![
        task("low-17", "2025-06-07", Some("17:00"), TaskPriority::Low, 0),
        task("high-none", "2025-06-07", None, TaskPriority::High, 1),
        task("medium-09", "2025-06-07", Some("09:00"), TaskPriority::Medium, 2),
    ];
    let games = vec![game("game-tbd", "2025-06-07", "TBD")];
    let agenda = Agenda::new(&tasks, &games);

    let window = Window::day(date("2025-06-07"));
    let filter = ItemFilter::pending().with_priority(PriorityFilter::All);
    let items = agenda.merged(&window, &filter);

    assert_eq!(
        ids(&items),
        vec!["medium-09", "low-17", "high-none", "game-tbd"]
    );
    assert_eq!(ids(&agenda.day(date("2025-06-07"), &filter)), ids(&items));
}

#[test]
fn test_week_and_month_agree_on_day_order() {
    let tasks = vec![
        task("a", "2025-06-03", None, TaskPriority::Low, 0),
        task("b", "2025-06-03", None, TaskPriority::High, 1),
        task("c", "2025-06-03", Some("08:00"), TaskPriority::Low, 2),
        task("d", "2025-06-05", None, TaskPriority::Medium, 3),
        task("e", "2025-06-29", None, TaskPriority::Medium, 4),
    ];
    let games = vec![game("g", "2025-06-03", "20:00")];
    let agenda = Agenda::new(&tasks, &games);
    let filter = ItemFilter::pending();

    let week = Window::week_containing(date("2025-06-04"), WeekStart::Sunday);
    let month = Window::month_containing(date("2025-06-04"));

    let week_days = agenda.window(&week, &filter);
    let month_days = agenda.window(&month, &filter);
    assert_eq!(week_days.len(), 7);
    assert_eq!(month_days.len(), 30);

    let week_tuesday = week_days
        .iter()
        .find(|day| day.date == date("2025-06-03"))
        .unwrap();
    let month_tuesday = month_days
        .iter()
        .find(|day| day.date == date("2025-06-03"))
        .unwrap();
    assert_eq!(ids(&week_tuesday.items), vec!["c", "g", "b", "a"]);
    assert_eq!(ids(&week_tuesday.items), ids(&month_tuesday.items));

    let merged_month = agenda.merged(&month, &filter);
    assert_eq!(ids(&merged_month), vec!["c", "g", "b", "a", "d", "e"]);
    assert!(!ids(&agenda.merged(&week, &filter)).contains(&"e"));
}

#[test]
fn test_completed_and_filtered_tasks_hidden_but_games_kept() {
    let mut done = task("done", "2025-06-07", None, TaskPriority::High, 0);
    done.completed = true;
    let tasks = vec![
        done,
        task("low", "2025-06-07", None, TaskPriority::Low, 1),
        task("high", "2025-06-07", None, TaskPriority::High, 2),
    ];
    let games = vec![game("game", "2025-06-07", "TBD")];
    let agenda = Agenda::new(&tasks, &games);
    let window = Window::day(date("2025-06-07"));

    let high_only = ItemFilter::pending().with_priority(PriorityFilter::High);
    assert_eq!(ids(&agenda.merged(&window, &high_only)), vec!["high", "game"]);

    let everything = ItemFilter::everything();
    assert_eq!(
        ids(&agenda.merged(&window, &everything)),
        vec!["done", "high", "low", "game"]
    );
}

#[test]
fn test_pending_list_and_completed_list() {
    let mut old_done = task("old-done", "2025-06-01", None, TaskPriority::Low, 0);
    old_done.completed = true;
    let mut new_done = task("new-done", "2025-06-09", None, TaskPriority::Low, 50);
    new_done.completed = true;
    let tasks = vec![
        old_done,
        task("later", "2025-06-10", Some("08:00"), TaskPriority::Low, 10),
        task("today", "2025-06-04", None, TaskPriority::Medium, 20),
        new_done,
        task("broken", "June 4th", None, TaskPriority::High, 30),
    ];
    let games = vec![game("game", "2025-06-04", "18:00")];
    let agenda = Agenda::new(&tasks, &games);

    let pending = agenda.all_pending();
    assert_eq!(ids(&pending), vec!["game", "today", "later"]);

    let today = agenda.pending_tasks_on(date("2025-06-04"));
    assert_eq!(ids(&today), vec!["today"]);

    let completed: Vec<&str> = agenda
        .completed_tasks()
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(completed, vec!["new-done", "old-done"]);
}
