//! Game state and core simulation types
//!
//! Everything a session touches lives on [`GameState`]; session reset is a
//! single struct reinitialization, so no component keeps hidden aliases.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first activate input
    Idle,
    /// Active gameplay - the only phase that advances the simulation
    Playing,
    /// Run ended on a collision
    GameOver,
}

/// The runner's vertical body under gravity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Top of the sprite
    pub y: f32,
    /// Vertical velocity, positive = down
    pub vel_y: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: PLAYER_GROUND_Y,
            vel_y: 0.0,
        }
    }
}

impl Player {
    /// True when the body sits exactly at the ground clamp value
    pub fn grounded(&self) -> bool {
        self.y == PLAYER_GROUND_Y
    }

    pub fn airborne(&self) -> bool {
        self.y < PLAYER_GROUND_Y
    }

    /// One gravity step: accelerate, move, clamp to ground.
    ///
    /// The clamp keeps `y <= GROUND_Y - PLAYER_HEIGHT` at all times and
    /// zeroes the velocity on ground contact.
    pub fn integrate(&mut self, gravity: f32) {
        self.vel_y += gravity;
        self.y += self.vel_y;

        if self.y >= PLAYER_GROUND_Y {
            self.y = PLAYER_GROUND_Y;
            self.vel_y = 0.0;
        }
    }

    /// Apply the jump impulse if grounded. Airborne requests are ignored -
    /// no double jump, no buffering.
    pub fn try_jump(&mut self, impulse: f32) -> bool {
        if self.grounded() {
            self.vel_y = impulse;
            true
        } else {
            false
        }
    }
}

/// Obstacle catalog - tagged variants carrying their own dimensions, so
/// rendering can dispatch on an exhaustive match instead of name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Candle1,
    Candle2,
    Candle3,
    Fisher,
}

impl ObstacleKind {
    pub const CATALOG: [ObstacleKind; 4] = [
        ObstacleKind::Candle1,
        ObstacleKind::Candle2,
        ObstacleKind::Candle3,
        ObstacleKind::Fisher,
    ];

    pub fn width(self) -> f32 {
        match self {
            ObstacleKind::Candle1 => 20.0,
            ObstacleKind::Candle2 => 26.0,
            ObstacleKind::Candle3 => 32.0,
            ObstacleKind::Fisher => 44.0,
        }
    }

    pub fn height(self) -> f32 {
        match self {
            ObstacleKind::Candle1 => 40.0,
            ObstacleKind::Candle2 => 48.0,
            ObstacleKind::Candle3 => 55.0,
            ObstacleKind::Fisher => 42.0,
        }
    }
}

/// The single active obstacle. Recycled in place when it leaves the screen,
/// never destroyed or reallocated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge; scrolls toward negative x
    pub x: f32,
    pub kind: ObstacleKind,
}

impl Default for Obstacle {
    fn default() -> Self {
        Self {
            x: GAME_WIDTH,
            kind: ObstacleKind::Candle1,
        }
    }
}

/// Complete game state, owned exclusively by the loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Validated balance parameters, fixed for the state's lifetime
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    pub obstacle: Obstacle,
    /// Scroll speed in pixels per step; never decreases within a session
    pub speed: f32,
    /// Steps survived this session
    pub score: u64,
    /// Score frozen on the collision step; meaningful in GameOver only
    pub final_score: u64,
    /// Best final score seen by this state (process memory only)
    pub high_score: u64,
    /// Step counter for animation phase and score sampling cadence
    pub frame_count: u64,
    /// Accumulated ground scroll, unbounded; visual only
    pub ground_offset: f32,
    /// One stream for the whole process - session resets do not reseed,
    /// so a multi-session run replays from a single seed
    pub(crate) rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            tuning,
            phase: GamePhase::Idle,
            player: Player::default(),
            obstacle: Obstacle::default(),
            speed: tuning.speed_start,
            score: 0,
            final_score: 0,
            high_score: 0,
            frame_count: 0,
            ground_offset: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reinitialize all session-scoped state. The high score and the RNG
    /// stream survive.
    pub fn reset_session(&mut self) {
        self.player = Player::default();
        self.obstacle = Obstacle::default();
        self.speed = self.tuning.speed_start;
        self.score = 0;
        self.final_score = 0;
        self.frame_count = 0;
        self.ground_offset = 0.0;
    }
}
