pub mod config;
pub mod data;
pub mod list;
pub mod render;
pub mod task;
pub mod view;

use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use planner_core::notify::{NotificationId, Variant};
use planner_core::task::parse_date;
use planner_core::{data_dir, Config, FileStore, Planner, ValidationError};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date_arg(raw: &str) -> Result<NaiveDate, ValidationError> {
    parse_date(raw).ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))
}

/// Open the planner on the data directory. Toasts are echoed to stderr as
/// they are enqueued.
pub fn open_planner() -> Result<(Planner<FileStore>, Config), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let dir = data_dir()?;
    tracing::debug!(dir = %dir.display(), "opening planner data");
    let store = FileStore::new(dir);
    let planner = Planner::open(store, &config, today());

    let last_shown: Rc<Cell<Option<NotificationId>>> = Rc::new(Cell::new(None));
    planner.notifications().subscribe(move |visible| {
        let Some(newest) = visible.first().filter(|n| n.open) else {
            return;
        };
        if last_shown.get() == Some(newest.id) {
            return;
        }
        last_shown.set(Some(newest.id));

        let marker = match newest.variant {
            Variant::Default => "*",
            Variant::Destructive => "!",
        };
        let title = newest.title.as_deref().unwrap_or_default();
        match newest.description.as_deref() {
            Some(description) => eprintln!("{marker} {title}: {description}"),
            None => eprintln!("{marker} {title}"),
        }
    });

    Ok((planner, config))
}

/// Ask before a destructive action. `--yes` skips the prompt; anything but
/// an explicit yes (including closed stdin) declines.
pub fn confirm(question: &str, yes: bool) -> std::io::Result<bool> {
    if yes {
        return Ok(true);
    }
    eprint!("{question} This cannot be undone. [y/N] ");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
