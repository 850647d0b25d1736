use chrono::{DateTime, Utc};
use collapse_engine::MoveLog;
use serde::{Deserialize, Serialize};

/// Autosaved game in progress. A seed and a move log are enough to
/// restore the whole board deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub seed: u64,
    pub moves: MoveLog,
}

/// Best finished game of a UTC day, with the running score recorded at
/// each shape completion. Later games the same day race these splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    pub score: u64,
    pub splits: Vec<u64>,
}

/// One leaderboard row. Seed and move log are kept alongside the score
/// so every stored entry stays re-validatable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub user_id: String,
    pub display_name: String,
    pub score: u64,
    pub seed: u64,
    pub moves: MoveLog,
    pub date: String,
    pub submitted_at: DateTime<Utc>,
}
