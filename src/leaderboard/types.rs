//! Wire types for the leaderboard backend.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One ranked row as returned by `GET /api/leaderboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    #[serde(default)]
    pub date: String,
}

impl LeaderboardEntry {
    /// Date for display: `YYYY-MM-DD` when the backend's timestamp parses,
    /// otherwise whatever the backend sent.
    pub fn display_date(&self) -> String {
        match NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%d %H:%M:%S") {
            Ok(dt) => dt.format("%Y-%m-%d").to_string(),
            Err(_) => self.date.clone(),
        }
    }
}

/// Body of `POST /api/score`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSubmission<'a> {
    pub name: &'a str,
    pub score: u32,
}

/// Reply to a submission. Success carries `success: true`; failure carries
/// an `error` message and no `success` field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
