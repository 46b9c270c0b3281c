//! Application facade tying stores, calendar view state, notifications and
//! the selection highlight together.
//!
//! Nothing here spawns timers. Callers pass the current time into
//! [`Planner::select_event`] and [`Planner::tick`], the same way a timer
//! engine is driven by periodic ticks.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::Result;
use crate::game::GameEvent;
use crate::highlight::Highlight;
use crate::notify::{NotificationCenter, Toast};
use crate::ordering::{Agenda, DisplayItem, ItemFilter, PriorityFilter, ViewMode, WeekStart, Window};
use crate::samples::sample_drafts;
use crate::storage::{Config, GameStore, KeyValueStore, TaskStore};
use crate::task::{Task, TaskDraft};

/// Navigation direction for [`Planner::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// What the calendar and task list currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub selected: NaiveDate,
    /// Applied to the calendar windows.
    pub filter: ItemFilter,
    /// List every pending item instead of today's tasks only.
    pub show_all_pending: bool,
}

pub struct Planner<S> {
    tasks: TaskStore<S>,
    games: GameStore<S>,
    notifications: NotificationCenter,
    highlight: Highlight,
    view: ViewState,
    week_start: WeekStart,
}

impl<S: KeyValueStore + Clone> Planner<S> {
    /// Load both stores from `slot` and start on the configured view.
    pub fn open(slot: S, config: &Config, today: NaiveDate) -> Self {
        let week_start = config.calendar.week_start;
        let mode = config.calendar.default_view;
        Self {
            tasks: TaskStore::open(slot.clone()),
            games: GameStore::open(slot),
            notifications: NotificationCenter::new(
                config.notifications.limit,
                config.notifications.remove_delay_ms,
            ),
            highlight: Highlight::new(config.highlight.clear_after_ms),
            view: ViewState {
                mode,
                selected: anchor(mode, today, today, week_start),
                filter: ItemFilter::pending(),
                show_all_pending: false,
            },
            week_start,
        }
    }
}

impl<S: KeyValueStore> Planner<S> {
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn games(&self) -> &[GameEvent] {
        self.games.games()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn agenda(&self) -> Agenda<'_> {
        Agenda::new(self.tasks.tasks(), self.games.games())
    }

    pub fn current_window(&self) -> Window {
        Window::for_view(self.view.mode, self.view.selected, self.week_start)
    }

    /// Validate and store a new task.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<Task> {
        draft.validate()?;
        let task = self.tasks.create(draft);
        self.notifications.enqueue(
            Toast::titled("Task added").with_description(format!("\"{}\" was added.", task.title)),
        );
        Ok(task)
    }

    /// Validate and apply an edit. `Ok(None)` when `id` is unknown.
    pub fn update_task(&mut self, id: &str, draft: TaskDraft) -> Result<Option<Task>> {
        draft.validate()?;
        let Some(task) = self.tasks.update(id, draft) else {
            return Ok(None);
        };
        self.notifications.enqueue(
            Toast::titled("Task updated")
                .with_description(format!("\"{}\" was updated.", task.title)),
        );
        Ok(Some(task))
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        let removed = self.tasks.delete(id);
        if removed {
            self.notifications.enqueue(
                Toast::titled("Task removed")
                    .with_description("The task was removed.")
                    .destructive(),
            );
        }
        removed
    }

    /// Flip completion. Returns the new state, `None` for an unknown id.
    pub fn toggle_task(&mut self, id: &str) -> Option<bool> {
        let completed = self.tasks.toggle_completion(id)?;
        let title = if completed {
            "Task completed"
        } else {
            "Task reopened"
        };
        self.notifications.enqueue(Toast::titled(title));
        Some(completed)
    }

    /// Add the example tasks for the week containing `today`.
    pub fn add_sample_tasks(&mut self, today: NaiveDate) -> Vec<Task> {
        let created = self
            .tasks
            .create_many(sample_drafts(today, self.week_start));
        self.notifications.enqueue(
            Toast::titled("Example tasks added").with_description(format!(
                "{} tasks were added for the current week.",
                created.len()
            )),
        );
        created
    }

    /// Clear every task and restore the default game catalog.
    pub fn reset_keep_games(&mut self) {
        self.tasks.clear_all();
        self.games.reset();
        self.highlight.clear();
        tracing::info!("tasks cleared, default games restored");
        self.notifications.enqueue(
            Toast::titled("Planner reset")
                .with_description("Your tasks were cleared and the default games restored."),
        );
    }

    /// Clear every task and every game.
    pub fn clear_all_data(&mut self) {
        self.tasks.clear_all();
        self.games.clear();
        self.highlight.clear();
        tracing::info!("all tasks and games cleared");
        self.notifications.enqueue(
            Toast::titled("All data removed")
                .with_description("Your tasks and games were cleared.")
                .destructive(),
        );
    }

    /// Clear every task, games untouched.
    pub fn clear_tasks(&mut self) {
        self.tasks.clear_all();
        self.highlight.clear();
        self.notifications.enqueue(
            Toast::titled("Tasks cleared")
                .with_description("Every task was removed.")
                .destructive(),
        );
    }

    /// Week and month jump to the window containing `today`; day keeps the
    /// selected date.
    pub fn set_view(&mut self, mode: ViewMode, today: NaiveDate) {
        self.view.selected = anchor(mode, today, self.view.selected, self.week_start);
        self.view.mode = mode;
        self.highlight.clear();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.view.selected = date;
        self.highlight.clear();
    }

    /// Move to the previous or next window of the current view. Week and
    /// month land on the first day of the new window.
    pub fn navigate(&mut self, direction: Direction) {
        let window = self.current_window();
        let moved = match direction {
            Direction::Next => window.next(),
            Direction::Prev => window.prev(),
        };
        if let Some(window) = moved {
            self.view.selected = window.first_day();
        }
        self.highlight.clear();
    }

    pub fn switch_to_week(&mut self, date: NaiveDate) {
        self.view.mode = ViewMode::Week;
        self.view.selected = Window::week_containing(date, self.week_start).first_day();
        self.highlight.clear();
    }

    pub fn switch_to_month(&mut self, today: NaiveDate) {
        self.view.mode = ViewMode::Month;
        self.view.selected = Window::month_containing(today).first_day();
        self.highlight.clear();
    }

    /// Jump to the day of an item picked in the week or month view and
    /// highlight it.
    pub fn select_event(&mut self, date: NaiveDate, id: &str, now: DateTime<Utc>) {
        self.view.selected = date;
        self.view.mode = ViewMode::Day;
        self.highlight.set(id, now);
    }

    pub fn set_priority_filter(&mut self, priority: PriorityFilter) {
        self.view.filter = self.view.filter.with_priority(priority);
    }

    pub fn set_show_completed(&mut self, show: bool) {
        self.view.filter = self.view.filter.including_completed(show);
    }

    pub fn set_show_all_pending(&mut self, show: bool) {
        self.view.show_all_pending = show;
    }

    pub fn toggle_show_all_pending(&mut self) -> bool {
        self.view.show_all_pending = !self.view.show_all_pending;
        self.view.show_all_pending
    }

    /// The task list: every pending item when `show_all_pending` is set,
    /// otherwise the pending tasks of `date`.
    pub fn pending_list(&self, date: NaiveDate) -> Vec<DisplayItem<'_>> {
        let agenda = self.agenda();
        if self.view.show_all_pending {
            agenda.all_pending()
        } else {
            agenda.pending_tasks_on(date)
        }
    }

    /// Run due notification removals and the highlight timer. Returns
    /// `true` when anything changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let removed = self.notifications.tick(now);
        let cleared = self.highlight.tick(now);
        removed > 0 || cleared
    }

    /// Drop every pending timer and observer.
    pub fn shutdown(&mut self) {
        self.notifications.shutdown();
        self.highlight.clear();
    }
}

fn anchor(mode: ViewMode, today: NaiveDate, selected: NaiveDate, week_start: WeekStart) -> NaiveDate {
    match mode {
        ViewMode::Day => selected,
        ViewMode::Week | ViewMode::Month => Window::for_view(mode, today, week_start).first_day(),
    }
}
