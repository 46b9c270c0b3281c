mod config;
mod game_store;
mod slot;
mod task_store;

pub use config::{CalendarConfig, Config, HighlightConfig, NotificationsConfig};
pub use game_store::{GameStore, GAMES_KEY};
pub use slot::{save_json, FileStore, KeyValueStore, MemoryStore};
pub use task_store::{TaskStore, TASKS_KEY};

use std::path::PathBuf;

/// Returns `$PLANNER_HOME` when set, otherwise `~/.config/planner[-dev]/`
/// based on PLANNER_ENV.
///
/// Set PLANNER_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("PLANNER_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("PLANNER_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("planner-dev")
            } else {
                base_dir.join("planner")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
