//! Configuration, constants and the persisted high score.

pub mod config;
pub mod constants;
pub mod high_score;

pub use config::{Config, WorldConfig};
pub use constants::*;
pub use high_score::HighScoreStore;
