use clap::Args;
use serde_json::json;

use super::render::{item_line, task_line};
use super::{open_planner, parse_date_arg, today, CliResult};

#[derive(Args)]
pub struct ListArgs {
    /// Every pending task and game instead of one day's tasks
    #[arg(long)]
    pub all: bool,
    /// Day to list as YYYY-MM-DD (default: today)
    #[arg(long, conflicts_with = "all")]
    pub date: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs) -> CliResult {
    let (mut planner, _config) = open_planner()?;
    let date = match args.date.as_deref() {
        Some(raw) => parse_date_arg(raw)?,
        None => today(),
    };

    planner.set_show_all_pending(args.all);
    {
        let show_all = planner.view().show_all_pending;
        let pending = planner.pending_list(date);
        let completed = planner.agenda().completed_tasks();

        if args.json {
            let out = json!({ "pending": pending, "completed": completed });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            if show_all {
                println!("Pending:");
            } else {
                println!("Pending on {date}:");
            }
            if pending.is_empty() {
                println!("  nothing pending");
            }
            for item in &pending {
                if show_all {
                    println!("  {} {}", item.date, item_line(item));
                } else {
                    println!("  {}", item_line(item));
                }
            }
            if !completed.is_empty() {
                println!("Completed:");
                for task in completed {
                    println!("  {}", task_line(task));
                }
            }
        }
    }

    planner.shutdown();
    Ok(())
}
