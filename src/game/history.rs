//! Score history persisted to ~/.trash_toss/scores.json.

use super::types::RoundResult;
use crate::core::constants::{SCORES_FILE, SCORE_HISTORY_LEN};
use crate::core::persistence::{data_path, load_json_or_default, save_json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// One finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: i32,
    pub result: RoundResult,
    /// RFC 3339 timestamp.
    pub played_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreHistory {
    pub best_score: Option<i32>,
    pub games_played: u32,
    pub wins: u32,
    /// Most recent first, capped at `SCORE_HISTORY_LEN`.
    pub recent: Vec<ScoreRecord>,
}

impl ScoreHistory {
    /// Load from ~/.trash_toss/scores.json, or start empty.
    pub fn load() -> Self {
        match data_path(SCORES_FILE) {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "no data directory, score history disabled");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        load_json_or_default(path)
    }

    pub fn save(&self) -> io::Result<()> {
        self.save_to(&data_path(SCORES_FILE)?)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        save_json(path, self)
    }

    /// Record a finished round. Returns true if it set a new best score.
    pub fn record(&mut self, score: i32, result: RoundResult, now: DateTime<Utc>) -> bool {
        self.games_played += 1;
        if result == RoundResult::Win {
            self.wins += 1;
        }

        let new_best = self.best_score.map_or(true, |best| score > best);
        if new_best {
            self.best_score = Some(score);
        }

        self.recent.insert(
            0,
            ScoreRecord {
                score,
                result,
                played_at: now.to_rfc3339(),
            },
        );
        self.recent.truncate(SCORE_HISTORY_LEN);
        new_best
    }
}
