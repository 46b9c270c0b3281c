//! Day, week and month windows.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// First day of a calendar week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    #[default]
    Sunday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Tuesday => Weekday::Tue,
            WeekStart::Wednesday => Weekday::Wed,
            WeekStart::Thursday => Weekday::Thu,
            WeekStart::Friday => Weekday::Fri,
            WeekStart::Saturday => Weekday::Sat,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Start of the week containing `date`, clamped to [`NaiveDate::MIN`].
    pub fn week_of(&self, date: NaiveDate) -> NaiveDate {
        let from = self.weekday().num_days_from_monday();
        let today = date.weekday().num_days_from_monday();
        let offset = (today + 7 - from) % 7;
        date.checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl FromStr for WeekStart {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weekday: Weekday = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::UnknownWeekday(s.to_string()))?;
        Ok(match weekday {
            Weekday::Mon => WeekStart::Monday,
            Weekday::Tue => WeekStart::Tuesday,
            Weekday::Wed => WeekStart::Wednesday,
            Weekday::Thu => WeekStart::Thursday,
            Weekday::Fri => WeekStart::Friday,
            Weekday::Sat => WeekStart::Saturday,
            Weekday::Sun => WeekStart::Sunday,
        })
    }
}

/// Calendar granularity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            _ => Err(ValidationError::UnknownView(s.to_string())),
        }
    }
}

/// A contiguous range of days.
///
/// Constructors normalize the anchor date, so `Week` always holds the
/// configured start of week and `Month` the first of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Window {
    Day(NaiveDate),
    Week(NaiveDate),
    Month(NaiveDate),
}

impl Window {
    pub fn day(date: NaiveDate) -> Self {
        Window::Day(date)
    }

    pub fn week_containing(date: NaiveDate, week_start: WeekStart) -> Self {
        Window::Week(week_start.week_of(date))
    }

    pub fn month_containing(date: NaiveDate) -> Self {
        Window::Month(first_of_month(date))
    }

    pub fn for_view(mode: ViewMode, date: NaiveDate, week_start: WeekStart) -> Self {
        match mode {
            ViewMode::Day => Self::day(date),
            ViewMode::Week => Self::week_containing(date, week_start),
            ViewMode::Month => Self::month_containing(date),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        match *self {
            Window::Day(date) | Window::Week(date) => date,
            Window::Month(date) => first_of_month(date),
        }
    }

    pub fn last_day(&self) -> NaiveDate {
        let first = self.first_day();
        match self {
            Window::Day(_) => first,
            Window::Week(_) => first
                .checked_add_days(Days::new(6))
                .unwrap_or(NaiveDate::MAX),
            Window::Month(_) => first
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .unwrap_or(first),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }

    /// Every day of the window in ascending order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let last = self.last_day();
        std::iter::successors(Some(self.first_day()), |day| day.succ_opt())
            .take_while(|day| *day <= last)
            .collect()
    }

    /// The following window of the same kind, `None` past the calendar end.
    pub fn next(&self) -> Option<Self> {
        match *self {
            Window::Day(date) => date.succ_opt().map(Window::Day),
            Window::Week(date) => date.checked_add_days(Days::new(7)).map(Window::Week),
            Window::Month(_) => self
                .first_day()
                .checked_add_months(Months::new(1))
                .map(Window::Month),
        }
    }

    /// The preceding window of the same kind, `None` before the calendar start.
    pub fn prev(&self) -> Option<Self> {
        match *self {
            Window::Day(date) => date.pred_opt().map(Window::Day),
            Window::Week(date) => date.checked_sub_days(Days::new(7)).map(Window::Week),
            Window::Month(_) => self
                .first_day()
                .checked_sub_months(Months::new(1))
                .map(Window::Month),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
