//! Filtered, ordered views over tasks and games.

use chrono::NaiveDate;
use serde::Serialize;

use super::filter::ItemFilter;
use super::item::DisplayItem;
use super::sort::{sort_merged, sort_within_day, CreatedOrder};
use super::window::Window;
use crate::game::GameEvent;
use crate::task::Task;

/// Items of one day of a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule<'a> {
    pub date: NaiveDate,
    pub items: Vec<DisplayItem<'a>>,
}

impl DaySchedule<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Inclusive date bounds; `None` means unbounded.
type Range = Option<(NaiveDate, NaiveDate)>;

/// Borrowing view over a snapshot of tasks and games.
///
/// Every method returns the full filtered and sorted sequence. Inline
/// truncation is left to whoever renders it.
#[derive(Debug, Clone, Copy)]
pub struct Agenda<'a> {
    tasks: &'a [Task],
    games: &'a [GameEvent],
    created_order: CreatedOrder,
}

impl<'a> Agenda<'a> {
    pub fn new(tasks: &'a [Task], games: &'a [GameEvent]) -> Self {
        Self {
            tasks,
            games,
            created_order: CreatedOrder::default(),
        }
    }

    pub fn with_created_order(mut self, order: CreatedOrder) -> Self {
        self.created_order = order;
        self
    }

    /// Sorted items of a single day.
    pub fn day(&self, date: NaiveDate, filter: &ItemFilter) -> Vec<DisplayItem<'a>> {
        let mut items = self.collect(Some((date, date)), filter, true);
        sort_within_day(&mut items, self.created_order);
        items
    }

    /// One schedule per day of `window`, empty days included.
    pub fn window(&self, window: &Window, filter: &ItemFilter) -> Vec<DaySchedule<'a>> {
        let mut items = self
            .merged(window, filter)
            .into_iter()
            .peekable();

        window
            .days()
            .into_iter()
            .map(|date| {
                let mut day_items = Vec::new();
                while let Some(item) = items.next_if(|item| item.date == date) {
                    day_items.push(item);
                }
                DaySchedule {
                    date,
                    items: day_items,
                }
            })
            .collect()
    }

    /// Flat listing of `window`, ordered by date first.
    pub fn merged(&self, window: &Window, filter: &ItemFilter) -> Vec<DisplayItem<'a>> {
        let range = Some((window.first_day(), window.last_day()));
        let mut items = self.collect(range, filter, true);
        sort_merged(&mut items, self.created_order);
        items
    }

    /// Every pending task and every game, ordered by date first.
    pub fn all_pending(&self) -> Vec<DisplayItem<'a>> {
        let mut items = self.collect(None, &ItemFilter::pending(), true);
        sort_merged(&mut items, self.created_order);
        items
    }

    /// Pending tasks scheduled on `date`, without games.
    pub fn pending_tasks_on(&self, date: NaiveDate) -> Vec<DisplayItem<'a>> {
        let mut items = self.collect(Some((date, date)), &ItemFilter::pending(), false);
        sort_within_day(&mut items, self.created_order);
        items
    }

    /// Completed tasks, most recently created first.
    pub fn completed_tasks(&self) -> Vec<&'a Task> {
        let mut done: Vec<&Task> = self.tasks.iter().filter(|task| task.completed).collect();
        done.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        done
    }

    pub fn is_empty(&self, window: &Window, filter: &ItemFilter) -> bool {
        let range = Some((window.first_day(), window.last_day()));
        self.collect(range, filter, true).is_empty()
    }

    fn collect(&self, range: Range, filter: &ItemFilter, with_games: bool) -> Vec<DisplayItem<'a>> {
        let in_range = |date: NaiveDate| match range {
            Some((first, last)) => first <= date && date <= last,
            None => true,
        };

        let mut items = Vec::new();
        for task in self.tasks.iter().filter(|task| filter.admits(task)) {
            let Some(date) = task.scheduled_date() else {
                tracing::debug!(task_id = %task.id, task_date = %task.task_date, "skipping task with unparseable date");
                continue;
            };
            if in_range(date) {
                items.push(DisplayItem::from_task(task, date));
            }
        }

        if with_games {
            for game in self.games {
                let Some(date) = game.scheduled_date() else {
                    tracing::debug!(game_id = %game.id, date = %game.date, "skipping game with unparseable date");
                    continue;
                };
                if in_range(date) {
                    items.push(DisplayItem::from_game(game, date));
                }
            }
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::filter::PriorityFilter;
    use crate::ordering::window::WeekStart;
    use crate::task::TaskPriority;
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_748_000_000 + secs, 0).unwrap()
    }

    fn task(id: &str, date: &str, time: Option<&str>, priority: TaskPriority) -> Task {
        Task {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            task_date: date.to_string(),
            task_time: time.map(str::to_string),
            priority,
            completed: false,
            created_at: at(0),
            icon: None,
        }
    }

    fn game(id: &str, date: &str, time: &str) -> GameEvent {
        GameEvent {
            id: id.to_string(),
            team_name: "FURIA".to_string(),
            opponent: "MOUZ".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            tournament: "Major".to_string(),
            betting_link: None,
        }
    }

    fn ids(items: &[DisplayItem<'_>]) -> Vec<String> {
        items.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn day_merges_tasks_and_games() {
        let tasks = vec![
            task("low-17", "2025-06-07", Some("17:00"), TaskPriority::Low),
            task("high", "2025-06-07", None, TaskPriority::High),
            task("medium-09", "2025-06-07", Some("09:00"), TaskPriority::Medium),
        ];
        let games = vec![game("game", "2025-06-07", "TBD")];
        let items = Agenda::new(&tasks, &games).day(d("2025-06-07"), &ItemFilter::pending());
        assert_eq!(ids(&items), ["medium-09", "low-17", "high", "game"]);
    }

    #[test]
    fn created_order_flips_untimed_ties() {
        let mut older = task("older", "2025-06-07", None, TaskPriority::Medium);
        older.created_at = at(0);
        let mut newer = task("newer", "2025-06-07", None, TaskPriority::Medium);
        newer.created_at = at(60);
        let tasks = vec![newer, older];
        let week = Window::week_containing(d("2025-06-07"), WeekStart::Sunday);

        let oldest_first = Agenda::new(&tasks, &[]);
        assert_eq!(ids(&oldest_first.day(d("2025-06-07"), &ItemFilter::pending())), ["older", "newer"]);
        assert_eq!(ids(&oldest_first.merged(&week, &ItemFilter::pending())), ["older", "newer"]);

        let newest_first = Agenda::new(&tasks, &[]).with_created_order(CreatedOrder::NewestFirst);
        assert_eq!(ids(&newest_first.day(d("2025-06-07"), &ItemFilter::pending())), ["newer", "older"]);
        assert_eq!(ids(&newest_first.merged(&week, &ItemFilter::pending())), ["newer", "older"]);
        assert_eq!(ids(&newest_first.pending_tasks_on(d("2025-06-07"))), ["newer", "older"]);
    }

    #[test]
    fn malformed_dates_are_skipped_everywhere() {
        let tasks = vec![
            task("broken", "07/06/2025", None, TaskPriority::High),
            task("ok", "2025-06-07", None, TaskPriority::High),
        ];
        let games = vec![game("broken-game", "soon", "TBD")];
        let agenda = Agenda::new(&tasks, &games);

        assert_eq!(ids(&agenda.day(d("2025-06-07"), &ItemFilter::pending())), ["ok"]);
        assert_eq!(ids(&agenda.all_pending()), ["ok"]);
        let week = Window::week_containing(d("2025-06-07"), WeekStart::Sunday);
        assert_eq!(ids(&agenda.merged(&week, &ItemFilter::everything())), ["ok"]);
    }

    #[test]
    fn window_yields_every_day_even_when_empty() {
        let tasks = vec![task("t", "2025-06-03", None, TaskPriority::Low)];
        let games = vec![game("g", "2025-06-07", "17:30")];
        let week = Window::week_containing(d("2025-06-04"), WeekStart::Sunday);
        let days = Agenda::new(&tasks, &games).window(&week, &ItemFilter::pending());

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, d("2025-06-01"));
        assert_eq!(ids(&days[2].items), ["t"]);
        assert_eq!(ids(&days[6].items), ["g"]);
        assert_eq!(days.iter().filter(|day| day.is_empty()).count(), 5);
    }

    #[test]
    fn window_excludes_items_outside_range() {
        let tasks = vec![
            task("may", "2025-05-31", None, TaskPriority::Low),
            task("june", "2025-06-30", None, TaskPriority::Low),
            task("july", "2025-07-01", None, TaskPriority::Low),
        ];
        let month = Window::month_containing(d("2025-06-15"));
        let merged = Agenda::new(&tasks, &[]).merged(&month, &ItemFilter::pending());
        assert_eq!(ids(&merged), ["june"]);
    }

    #[test]
    fn window_returns_full_sequence_beyond_display_cap() {
        let tasks: Vec<Task> = (0..6)
            .map(|i| task(&format!("t{i}"), "2025-06-02", None, TaskPriority::Medium))
            .collect();
        let week = Window::week_containing(d("2025-06-02"), WeekStart::Monday);
        let days = Agenda::new(&tasks, &[]).window(&week, &ItemFilter::pending());
        assert_eq!(days[0].len(), 6);
    }

    #[test]
    fn filters_apply_to_tasks_only() {
        let mut done = task("done", "2025-06-07", None, TaskPriority::High);
        done.completed = true;
        let tasks = vec![done, task("low", "2025-06-07", None, TaskPriority::Low)];
        let games = vec![game("g", "2025-06-07", "TBD")];
        let agenda = Agenda::new(&tasks, &games);

        let high_only = ItemFilter::pending().with_priority(PriorityFilter::High);
        assert_eq!(ids(&agenda.day(d("2025-06-07"), &high_only)), ["g"]);

        let with_done = high_only.including_completed(true);
        assert_eq!(ids(&agenda.day(d("2025-06-07"), &with_done)), ["done", "g"]);
    }

    #[test]
    fn pending_tasks_on_leaves_games_out() {
        let tasks = vec![task("t", "2025-06-07", None, TaskPriority::Low)];
        let games = vec![game("g", "2025-06-07", "10:00")];
        let items = Agenda::new(&tasks, &games).pending_tasks_on(d("2025-06-07"));
        assert_eq!(ids(&items), ["t"]);
    }

    #[test]
    fn all_pending_orders_by_date_then_time() {
        let tasks = vec![
            task("b", "2025-06-07", None, TaskPriority::High),
            task("a", "2025-06-01", Some("20:00"), TaskPriority::Low),
        ];
        let games = vec![
            game("g1", "2025-06-01", "16:30"),
            game("g7", "2025-06-07", "17:30"),
        ];
        let items = Agenda::new(&tasks, &games).all_pending();
        assert_eq!(ids(&items), ["g1", "a", "g7", "b"]);
    }

    #[test]
    fn completed_tasks_are_newest_first() {
        let mut old = task("old", "2025-06-01", None, TaskPriority::Low);
        old.completed = true;
        let mut new = task("new", "bogus", None, TaskPriority::Low);
        new.completed = true;
        new.created_at = at(3600);
        let tasks = vec![old, new, task("pending", "2025-06-01", None, TaskPriority::Low)];

        let done: Vec<&str> = Agenda::new(&tasks, &[])
            .completed_tasks()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(done, ["new", "old"]);
    }

    #[test]
    fn is_empty_reflects_filter() {
        let mut done = task("done", "2025-06-07", None, TaskPriority::High);
        done.completed = true;
        let tasks = vec![done];
        let day = Window::day(d("2025-06-07"));
        let agenda = Agenda::new(&tasks, &[]);
        assert!(agenda.is_empty(&day, &ItemFilter::pending()));
        assert!(!agenda.is_empty(&day, &ItemFilter::everything()));
    }

    fn priority_strategy() -> impl Strategy<Value = TaskPriority> {
        prop_oneof![
            Just(TaskPriority::High),
            Just(TaskPriority::Medium),
            Just(TaskPriority::Low)
        ]
    }

    fn filter_strategy() -> impl Strategy<Value = ItemFilter> {
        (
            prop_oneof![
                Just(PriorityFilter::All),
                Just(PriorityFilter::High),
                Just(PriorityFilter::Medium),
                Just(PriorityFilter::Low)
            ],
            any::<bool>(),
        )
            .prop_map(|(priority, include_completed)| ItemFilter {
                priority,
                include_completed,
            })
    }

    fn task_strategy() -> impl Strategy<Value = Task> {
        (
            0u32..4,
            prop_oneof![Just(None), Just(Some("08:00")), Just(Some("12:30"))],
            priority_strategy(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(day, time, priority, completed, broken)| {
                let date = if broken {
                    "2025-06-3x".to_string()
                } else {
                    format!("2025-06-{:02}", 6 + day)
                };
                let mut t = task("p", &date, time, priority);
                t.completed = completed;
                t
            })
    }

    proptest! {
        #[test]
        fn filter_admits_exactly_the_matching_tasks(
            mut tasks in prop::collection::vec(task_strategy(), 0..24),
            filter in filter_strategy(),
        ) {
            for (i, t) in tasks.iter_mut().enumerate() {
                t.id = format!("t{i}");
            }
            let date = d("2025-06-07");
            let items = Agenda::new(&tasks, &[]).day(date, &filter);
            let mut got: Vec<&str> = items.iter().map(|i| i.id).collect();
            got.sort_unstable();

            let mut expected: Vec<&str> = tasks
                .iter()
                .filter(|t| !(t.completed && !filter.include_completed))
                .filter(|t| filter.priority.matches(t.priority))
                .filter(|t| t.scheduled_date() == Some(date))
                .map(|t| t.id.as_str())
                .collect();
            expected.sort_unstable();

            prop_assert_eq!(got, expected);
        }

        #[test]
        fn fully_tied_tasks_keep_input_order(count in 1usize..16) {
            let tasks: Vec<Task> = (0..count)
                .map(|i| task(&format!("t{i:02}"), "2025-06-07", Some("10:00"), TaskPriority::Medium))
                .collect();
            let items = Agenda::new(&tasks, &[]).day(d("2025-06-07"), &ItemFilter::pending());
            let expected: Vec<String> = (0..count).map(|i| format!("t{i:02}")).collect();
            prop_assert_eq!(ids(&items), expected);
        }
    }
}
