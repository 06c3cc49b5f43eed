// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 16;
pub const MAX_FRAME_DELTA_SECONDS: f64 = 0.25;

// Round constants
pub const ROUND_SECONDS: f64 = 30.0;
pub const WIN_SCORE: i32 = 45;
pub const BATCH_SIZE: usize = 3;

// Streak thresholds (counter resets once reached)
pub const CORRECT_STREAK_RESET: u32 = 10;
pub const WRONG_STREAK_RESET: u32 = 3;

// Timed effect delays in seconds
pub const SOUND_DELAY_SECONDS: f64 = 0.25;
pub const DEFLECT_DELAY_SECONDS: f64 = 0.25;
pub const CORRECT_RESOLVE_SECONDS: f64 = 0.5;
pub const WRONG_RESOLVE_SECONDS: f64 = 1.0;

// Physics constants
pub const FIXED_PHYSICS_STEP: f32 = 0.02;
pub const ITEM_MASS: f32 = 1.0;
pub const THROW_FORCE_SCALE: f32 = 100.0;
pub const BOUNCE_FORCE: [f32; 2] = [100.0, 100.0];
pub const DEFLECT_SPEED: f32 = 15.0;
pub const DEFAULT_GRAVITY: f32 = -9.81;

// Persistence constants
pub const DATA_DIR_NAME: &str = ".trash_toss";
pub const CONFIG_FILE: &str = "config.json";
pub const SCORES_FILE: &str = "scores.json";
pub const LOG_FILE: &str = "trash_toss.log";
pub const SCORE_HISTORY_LEN: usize = 10;
