//! Turkey Shoot - a top-down Thanksgiving arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, effects, levels, game state)
//! - `highscores`: Per-difficulty leaderboards
//! - `persistence`: Flat-file score store
//! - `assets`: Sprite lookup with solid-shape fallback

pub mod assets;
pub mod highscores;
pub mod persistence;
pub mod sim;

pub use highscores::{HighScores, ScoreEntry};
pub use sim::{Difficulty, GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u64 = 60;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;
    pub const PLAYER_GUN_HEIGHT: f32 = 15.0;
    pub const PLAYER_SHOOT_COOLDOWN_MS: u64 = 175;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 7.0;

    /// Enemy spawning
    pub const ENEMY_SPAWN_MARGIN: f32 = 50.0;
    /// Zigzag lateral step per tick
    pub const ZIGZAG_STEP: f32 = 2.0;
    /// Sine-wave movement shape (fixed, not difficulty-scaled)
    pub const SINE_AMPLITUDE: f32 = 100.0;
    pub const SINE_FREQUENCY: f32 = 0.05;

    /// Level progression
    pub const BASE_ENEMY_COUNT: f32 = 10.0;
    /// 20% more enemies per level
    pub const LEVEL_ENEMY_INCREASE: f32 = 0.2;
    /// 10% speed increase every 3 levels
    pub const LEVEL_SPEED_INCREASE: f32 = 0.1;
    pub const LEVELS_PER_SPEED_STEP: u32 = 3;
    /// Boss level every 5 levels
    pub const BOSS_LEVEL_INTERVAL: u32 = 5;

    /// Power-ups
    pub const POWERUP_SPAWN_MARGIN: f32 = 50.0;
    pub const POWERUP_SPAWN_INTERVAL_MS: u64 = 8000;
    pub const POWERUP_FALL_SPEED: f32 = 2.0;
    /// Shoot cooldown reduced to 90%
    pub const FIRE_RATE_MODIFIER: f32 = 0.9;
    /// 10% faster player movement
    pub const SPEED_BOOST_MODIFIER: f32 = 1.1;
    /// 50% slower enemies
    pub const SLOW_ENEMIES_MODIFIER: f32 = 0.5;

    /// On-screen notifications
    pub const MESSAGE_DURATION_MS: u64 = 3000;
    pub const MESSAGE_MAX_VISIBLE: usize = 5;

    /// High score name length cap
    pub const MAX_NAME_LEN: usize = 15;
}

/// Convert a millisecond duration to simulation ticks
#[inline]
pub const fn ms_to_ticks(ms: u64) -> u64 {
    ms * consts::TICK_RATE / 1000
}
