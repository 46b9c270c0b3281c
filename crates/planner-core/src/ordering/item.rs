//! Render-ready projection of tasks and games.

use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Cow;

use crate::game::GameEvent;
use crate::task::Task;

/// Where a [`DisplayItem`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ItemSource<'a> {
    Task(&'a Task),
    Game(&'a GameEvent),
}

/// One entry of a day, week or month listing.
///
/// Only derived; recomputed whenever the inputs change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem<'a> {
    pub id: &'a str,
    pub date: NaiveDate,
    pub time: Option<&'a str>,
    pub title: Cow<'a, str>,
    pub source: ItemSource<'a>,
}

impl<'a> DisplayItem<'a> {
    pub fn from_task(task: &'a Task, date: NaiveDate) -> Self {
        Self {
            id: &task.id,
            date,
            time: task.time(),
            title: Cow::Borrowed(&task.title),
            source: ItemSource::Task(task),
        }
    }

    pub fn from_game(game: &'a GameEvent, date: NaiveDate) -> Self {
        Self {
            id: &game.id,
            date,
            time: game.scheduled_time(),
            title: Cow::Owned(game.title()),
            source: ItemSource::Game(game),
        }
    }
}
