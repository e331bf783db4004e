//! Leaderboard backend access.
//!
//! The backend is an external HTTP service. `LeaderboardBackend` is the seam
//! the app talks to; `HttpLeaderboard` is the real implementation.

use super::types::{LeaderboardEntry, ScoreSubmission, SubmitReply};
use crate::core::constants::MIN_NAME_LEN;
use thiserror::Error;

const USER_AGENT: &str = concat!("fireflap/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaderboardError {
    /// Could not reach the backend.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered but refused the request.
    #[error("{0}")]
    Rejected(String),
    /// The backend's reply was not the expected JSON.
    #[error("invalid response: {0}")]
    Parse(String),
}

/// Submit scores and fetch the ranked list.
pub trait LeaderboardBackend: Send + Sync {
    fn submit(&self, name: &str, score: u32) -> Result<(), LeaderboardError>;
    fn fetch(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError>;
}

/// Check a display name before anything is sent. Returns the trimmed name.
pub fn validate_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err(format!(
            "Please enter a name with at least {} characters",
            MIN_NAME_LEN
        ));
    }
    Ok(name.to_string())
}

/// JSON-over-HTTP backend (`POST /api/score`, `GET /api/leaderboard`).
#[derive(Debug, Clone)]
pub struct HttpLeaderboard {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpLeaderboard {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: ureq::Agent::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl LeaderboardBackend for HttpLeaderboard {
    fn submit(&self, name: &str, score: u32) -> Result<(), LeaderboardError> {
        let response = match self
            .agent
            .post(&self.endpoint("/api/score"))
            .set("User-Agent", USER_AGENT)
            .send_json(ScoreSubmission { name, score })
        {
            Ok(response) => response,
            // Error statuses still carry a JSON body with the reason
            Err(ureq::Error::Status(code, response)) => {
                let reply: SubmitReply = response.into_json().unwrap_or_default();
                let reason = reply
                    .error
                    .unwrap_or_else(|| format!("server returned HTTP {}", code));
                return Err(LeaderboardError::Rejected(reason));
            }
            Err(e) => return Err(LeaderboardError::Network(e.to_string())),
        };

        let reply: SubmitReply = response
            .into_json()
            .map_err(|e| LeaderboardError::Parse(e.to_string()))?;

        if reply.success {
            Ok(())
        } else {
            Err(LeaderboardError::Rejected(
                reply.error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }

    fn fetch(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let response = self
            .agent
            .get(&self.endpoint("/api/leaderboard"))
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| LeaderboardError::Network(e.to_string()))?;

        response
            .into_json()
            .map_err(|e| LeaderboardError::Parse(e.to_string()))
    }
}
