use clap::Subcommand;

use super::{confirm, open_planner, today, CliResult};

#[derive(Subcommand)]
pub enum DataAction {
    /// Add nine example tasks for the current week
    Examples,
    /// Delete every task and restore the default games
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Delete every task and every game
    ClearAll {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: DataAction) -> CliResult {
    let (mut planner, _config) = open_planner()?;

    match action {
        DataAction::Examples => {
            let created = planner.add_sample_tasks(today());
            println!("Added {} example tasks", created.len());
        }
        DataAction::Reset { yes } => {
            if !confirm("Clear tasks and restore the default games?", yes)? {
                println!("aborted");
                return Ok(());
            }
            planner.reset_keep_games();
            println!("Tasks cleared, default games restored");
        }
        DataAction::ClearAll { yes } => {
            if !confirm("Clear all tasks and games?", yes)? {
                println!("aborted");
                return Ok(());
            }
            planner.clear_all_data();
            println!("All tasks and games cleared");
        }
    }

    planner.shutdown();
    Ok(())
}
