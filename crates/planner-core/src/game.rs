//! Externally-sourced game events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::parse_date;

/// Sentinel used by game feeds for a kick-off time not yet announced.
pub const TIME_TBD: &str = "TBD";

/// A scheduled game. Read-only from the planner's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    pub id: String,
    pub team_name: String,
    pub opponent: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM` or [`TIME_TBD`]
    pub time: String,
    pub tournament: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub betting_link: Option<String>,
}

impl GameEvent {
    pub fn scheduled_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Kick-off time, `None` for TBD or blank.
    pub fn scheduled_time(&self) -> Option<&str> {
        let time = self.time.trim();
        if time.is_empty() || time.eq_ignore_ascii_case(TIME_TBD) {
            None
        } else {
            Some(time)
        }
    }

    pub fn title(&self) -> String {
        format!("{} vs {}", self.team_name, self.opponent)
    }
}

/// The catalog shipped with the planner and restored by a reset.
pub fn default_games() -> Vec<GameEvent> {
    vec![
        GameEvent {
            id: "furia-blast-2025".to_string(),
            team_name: "FURIA".to_string(),
            opponent: TIME_TBD.to_string(),
            date: "2025-06-07".to_string(),
            time: TIME_TBD.to_string(),
            tournament: "BLAST.tv Austin Major 2025 Stage 2".to_string(),
            betting_link: Some("https://reidopitaco.bet.br/betting".to_string()),
        },
        GameEvent {
            id: "america-rn-sousa-2025".to_string(),
            team_name: "América-RN".to_string(),
            opponent: "Sousa EC".to_string(),
            date: "2025-06-01".to_string(),
            time: "16:30".to_string(),
            tournament: "Brasileirão Série D".to_string(),
            betting_link: Some("https://reidopitaco.bet.br/betting".to_string()),
        },
        GameEvent {
            id: "america-rn-csa-2025".to_string(),
            team_name: "América-RN".to_string(),
            opponent: "CSA".to_string(),
            date: "2025-06-07".to_string(),
            time: "17:30".to_string(),
            tournament: "Copa do Nordeste".to_string(),
            betting_link: Some("https://reidopitaco.bet.br/betting".to_string()),
        },
    ]
}
