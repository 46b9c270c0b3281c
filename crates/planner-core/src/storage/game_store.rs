//! Game event catalog persisted next to the tasks.

use super::slot::{save_json, KeyValueStore};
use crate::game::{default_games, GameEvent};

pub const GAMES_KEY: &str = "planner_games";

#[derive(Debug)]
pub struct GameStore<S> {
    slot: S,
    games: Vec<GameEvent>,
}

impl<S: KeyValueStore> GameStore<S> {
    /// Load the stored catalog, or the default one when nothing usable is
    /// stored.
    pub fn open(slot: S) -> Self {
        let games = read_games(&slot);
        Self { slot, games }
    }

    pub fn games(&self) -> &[GameEvent] {
        &self.games
    }

    pub fn replace_all(&mut self, games: Vec<GameEvent>) {
        self.games = games;
        self.persist();
    }

    pub fn reset(&mut self) {
        self.replace_all(default_games());
    }

    pub fn clear(&mut self) {
        self.replace_all(Vec::new());
    }

    fn persist(&self) {
        if let Err(err) = save_json(&self.slot, GAMES_KEY, &self.games) {
            tracing::warn!(error = %err, "unable to save games, keeping them in memory");
        }
    }
}

fn read_games(slot: &impl KeyValueStore) -> Vec<GameEvent> {
    match slot.get(GAMES_KEY) {
        Ok(Some(content)) => serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "stored games are corrupt, using default catalog");
            default_games()
        }),
        Ok(None) => default_games(),
        Err(err) => {
            tracing::warn!(error = %err, "unable to read stored games, using default catalog");
            default_games()
        }
    }
}
