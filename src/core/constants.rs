// World dimensions (world units, not terminal cells)
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;

// Player physics
pub const GRAVITY: f64 = 0.5;
pub const JUMP_FORCE: f64 = -10.0;
pub const PLAYER_WIDTH: f64 = 40.0;
pub const PLAYER_HEIGHT: f64 = 30.0;

// Obstacle pairs
pub const OBSTACLE_WIDTH: f64 = 80.0;
pub const OBSTACLE_GAP: f64 = 200.0;
pub const OBSTACLE_SPEED: f64 = 3.0;
/// Extra obstacle speed per ramp step, as a fraction of the base speed.
/// Zero keeps the speed constant.
pub const SPEED_RAMP_STEP: f64 = 0.0;
pub const SPEED_RAMP_POINTS: u32 = 10;
/// Minimum height of the top barrier and of the bottom barrier.
pub const OBSTACLE_MARGIN: f64 = 50.0;
pub const OBSTACLE_SPAWN_FRAMES: u64 = 100;

// Projectiles
pub const PROJECTILE_SPEED: f64 = 7.0;
pub const PROJECTILE_SIZE: f64 = 15.0;

// Hostiles
pub const HOSTILE_SIZE: f64 = 40.0;
pub const HOSTILE_SPEED: f64 = 2.0;
pub const HOSTILE_SPAWN_FRAMES: u64 = 200;

// Scoring
pub const POINTS_PER_OBSTACLE: u32 = 1;
pub const POINTS_PER_HOSTILE: u32 = 2;

// Frame loop
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 FPS

// Leaderboard
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
pub const MAX_LEADERBOARD_ROWS: usize = 50;
pub const LEADERBOARD_ROWS: usize = 10;
pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 10;

// Local storage
pub const DATA_DIR_NAME: &str = ".fireflap";
pub const STORAGE_FILE: &str = "storage.json";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "fireflap.log";
pub const HIGH_SCORE_KEY: &str = "fireflapHighScore";
