use clap::Args;
use planner_core::ordering::{PriorityFilter, ViewMode};
use serde_json::json;

use super::render::{day_block, item_line};
use super::{open_planner, parse_date_arg, today, CliResult};

#[derive(Args)]
pub struct ViewArgs {
    /// day, week or month
    pub mode: String,
    /// Any date inside the window (default: today)
    #[arg(long)]
    pub date: Option<String>,
    /// all, high, medium or low
    #[arg(long, default_value = "all")]
    pub priority: String,
    /// Include completed tasks
    #[arg(long)]
    pub show_completed: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ViewArgs) -> CliResult {
    let (mut planner, config) = open_planner()?;
    let mode = args.mode.parse::<ViewMode>()?;
    let date = match args.date.as_deref() {
        Some(raw) => parse_date_arg(raw)?,
        None => today(),
    };

    match mode {
        ViewMode::Day => {
            planner.set_view(ViewMode::Day, today());
            planner.set_date(date);
        }
        ViewMode::Week => planner.switch_to_week(date),
        ViewMode::Month => planner.switch_to_month(date),
    }
    planner.set_priority_filter(args.priority.parse::<PriorityFilter>()?);
    planner.set_show_completed(args.show_completed);

    {
        let window = planner.current_window();
        let filter = planner.view().filter;
        let days = planner.agenda().window(&window, &filter);

        if args.json {
            let out = json!({
                "view": mode,
                "first": window.first_day(),
                "last": window.last_day(),
                "days": days,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!(
                "{mode} view {} .. {}",
                window.first_day(),
                window.last_day()
            );
            if days.iter().all(|day| day.is_empty()) {
                println!("nothing scheduled");
            }
            for day in &days {
                match mode {
                    ViewMode::Day => {
                        for item in &day.items {
                            println!("  {}", item_line(item));
                        }
                    }
                    ViewMode::Week => {
                        for line in day_block(day, config.calendar.inline_items) {
                            println!("{line}");
                        }
                    }
                    ViewMode::Month if !day.is_empty() => {
                        for line in day_block(day, config.calendar.inline_items) {
                            println!("{line}");
                        }
                    }
                    ViewMode::Month => {}
                }
            }
        }
    }

    planner.shutdown();
    Ok(())
}
