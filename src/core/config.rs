//! Runtime configuration.
//!
//! Defaults come from `constants`; `~/.fireflap/config.json` may override any
//! subset of fields, and command-line flags override the file.

use super::constants::*;
use crate::utils::persistence::load_json_or_default;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable world parameters. Units are world units and frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub gravity: f64,
    pub jump_force: f64,
    pub player_width: f64,
    pub player_height: f64,
    pub obstacle_width: f64,
    pub obstacle_gap: f64,
    pub obstacle_speed: f64,
    /// Speed-up per `speed_ramp_points` scored, e.g. 0.25 for +25%.
    pub speed_ramp_step: f64,
    pub speed_ramp_points: u32,
    pub obstacle_margin: f64,
    pub obstacle_spawn_frames: u64,
    pub projectile_speed: f64,
    pub projectile_size: f64,
    pub hostile_size: f64,
    pub hostile_speed: f64,
    pub hostile_spawn_frames: u64,
    pub points_per_obstacle: u32,
    pub points_per_hostile: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_speed: OBSTACLE_SPEED,
            speed_ramp_step: SPEED_RAMP_STEP,
            speed_ramp_points: SPEED_RAMP_POINTS,
            obstacle_margin: OBSTACLE_MARGIN,
            obstacle_spawn_frames: OBSTACLE_SPAWN_FRAMES,
            projectile_speed: PROJECTILE_SPEED,
            projectile_size: PROJECTILE_SIZE,
            hostile_size: HOSTILE_SIZE,
            hostile_speed: HOSTILE_SPEED,
            hostile_spawn_frames: HOSTILE_SPAWN_FRAMES,
            points_per_obstacle: POINTS_PER_OBSTACLE,
            points_per_hostile: POINTS_PER_HOSTILE,
        }
    }
}

impl WorldConfig {
    /// Replace nonsensical values with defaults so the simulation can't
    /// divide by zero or spawn into an impossible gap.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.width <= 0.0 || self.height <= 0.0 {
            self.width = defaults.width;
            self.height = defaults.height;
        }
        if self.obstacle_spawn_frames == 0 {
            self.obstacle_spawn_frames = defaults.obstacle_spawn_frames;
        }
        if self.hostile_spawn_frames == 0 {
            self.hostile_spawn_frames = defaults.hostile_spawn_frames;
        }
        if self.obstacle_gap <= 0.0 || self.obstacle_gap >= self.height {
            self.obstacle_gap = (self.height / 3.0).min(defaults.obstacle_gap);
        }
        if self.speed_ramp_step < 0.0 || !self.speed_ramp_step.is_finite() {
            self.speed_ramp_step = defaults.speed_ramp_step;
        }
        if self.speed_ramp_points == 0 {
            self.speed_ramp_points = defaults.speed_ramp_points;
        }
        self
    }

    /// Obstacle speed for the current score. Each full `speed_ramp_points`
    /// adds `speed_ramp_step` times the base speed.
    pub fn obstacle_speed_at(&self, score: u32) -> f64 {
        let steps = (score / self.speed_ramp_points.max(1)) as f64;
        self.obstacle_speed * (1.0 + steps * self.speed_ramp_step)
    }
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the leaderboard backend.
    pub server_url: String,
    pub frame_interval_ms: u64,
    /// Maximum rows shown on the leaderboard panel.
    pub leaderboard_rows: usize,
    pub world: WorldConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            frame_interval_ms: FRAME_INTERVAL_MS,
            leaderboard_rows: LEADERBOARD_ROWS,
            world: WorldConfig::default(),
        }
    }
}

impl Config {
    /// Load from a JSON file, falling back to defaults for anything missing.
    pub fn load(path: &Path) -> Self {
        let mut config: Config = load_json_or_default(path);
        config.world = config.world.sanitized();
        if config.frame_interval_ms == 0 {
            config.frame_interval_ms = FRAME_INTERVAL_MS;
        }
        if !(1..=MAX_LEADERBOARD_ROWS).contains(&config.leaderboard_rows) {
            log::warn!(
                "leaderboard_rows {} out of range, using {}",
                config.leaderboard_rows,
                LEADERBOARD_ROWS
            );
            config.leaderboard_rows = LEADERBOARD_ROWS;
        }
        config
    }

    /// Apply a `--server` override, trimming any trailing slash.
    pub fn with_server_url(mut self, url: &str) -> Self {
        self.server_url = url.trim_end_matches('/').to_string();
        self
    }
}
