//! Persisted high score (~/.fireflap/storage.json).
//!
//! The storage file is a flat string-keyed map so other client-side values can
//! live beside the high score without a format change.

use super::constants::HIGH_SCORE_KEY;
use crate::utils::persistence::{load_json_or_default, save_json};
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

type Storage = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored high score, or 0 if missing or malformed.
    pub fn load(&self) -> u32 {
        let storage: Storage = load_json_or_default(&self.path);
        storage
            .get(HIGH_SCORE_KEY)
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0)
    }

    /// Write the high score, preserving any other keys in the file.
    pub fn save(&self, high_score: u32) -> io::Result<()> {
        let mut storage: Storage = load_json_or_default(&self.path);
        storage.insert(HIGH_SCORE_KEY.to_string(), high_score.into());
        save_json(&self.path, &storage)
    }
}
