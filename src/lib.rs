//! Shiba Run - an endless-runner game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle lifecycle, collision, game state)
//! - `render`: Surface contract and scene composition
//! - `assets`: Sprite handles with an explicit loaded/not-loaded gate
//! - `input`: Activate-event source abstraction
//! - `game`: The per-refresh loop harness tying the above together
//! - `highscores`: Process-lifetime leaderboard
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod game;
pub mod highscores;
pub mod input;
pub mod render;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// World dimensions (logical pixels)
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 300.0;
    /// Ground line the runner and obstacles sit on
    pub const GROUND_Y: f32 = 250.0;

    /// Player band - fixed horizontal position, square sprite
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Vertical position of a grounded player (the ground clamp value)
    pub const PLAYER_GROUND_Y: f32 = GROUND_Y - PLAYER_HEIGHT;

    /// Downward acceleration per simulated step
    pub const GRAVITY: f32 = 0.6;
    /// Jump impulse (negative = up)
    pub const JUMP_STRENGTH: f32 = -10.0;

    /// Scroll speed at session start, in pixels per step
    pub const GAME_SPEED_START: f32 = 5.0;
    /// Speed increase applied at qualifying recycle instants
    pub const SPEED_STEP: f32 = 0.5;
    /// Score multiple that qualifies a recycle for a speed-up
    pub const SPEED_THRESHOLD: u64 = 500;
    /// Upper bound of the uniform respawn jitter past the right edge
    pub const SPAWN_JITTER: f32 = 200.0;

    /// Steps per run-animation frame
    pub const RUN_FRAME_PERIOD: u64 = 10;
    /// Live score is emitted every this many steps
    pub const SCORE_EMIT_PERIOD: u64 = 10;

    /// Ground line dash pattern (on, off)
    pub const GROUND_DASH: [f32; 2] = [5.0, 10.0];
}
