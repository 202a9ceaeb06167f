//! Data-driven game balance
//!
//! The built-in constants are the defaults; hosts may override them with a
//! JSON document. Values are validated up front - a non-finite or
//! out-of-range parameter is a fatal configuration error, surfaced before
//! the loop ever runs a step.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance parameters, fixed for the lifetime of a [`GameState`].
///
/// [`GameState`]: crate::sim::GameState
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per step
    pub gravity: f32,
    /// Jump impulse; must be negative (up)
    pub jump_strength: f32,
    /// Scroll speed at session start
    pub speed_start: f32,
    /// Speed increase per qualifying recycle
    pub speed_step: f32,
    /// Score multiple that qualifies a recycle for a speed-up
    pub speed_threshold: u64,
    /// Upper bound of the uniform respawn jitter
    pub spawn_jitter: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            speed_start: GAME_SPEED_START,
            speed_step: SPEED_STEP,
            speed_threshold: SPEED_THRESHOLD,
            spawn_jitter: SPAWN_JITTER,
        }
    }
}

/// Rejected configuration input
#[derive(Debug)]
pub enum TuningError {
    Parse(serde_json::Error),
    NonFinite(&'static str),
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(err) => write!(f, "tuning JSON did not parse: {err}"),
            TuningError::NonFinite(field) => {
                write!(f, "tuning field `{field}` is not a finite number")
            }
            TuningError::OutOfRange { field, reason } => {
                write!(f, "tuning field `{field}` {reason}")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override document. Missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(TuningError::Parse)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("speed_start", self.speed_start),
            ("speed_step", self.speed_step),
            ("spawn_jitter", self.spawn_jitter),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TuningError::NonFinite(field));
            }
        }

        if self.gravity <= 0.0 {
            return Err(TuningError::OutOfRange {
                field: "gravity",
                reason: "must be positive",
            });
        }
        if self.jump_strength >= 0.0 {
            return Err(TuningError::OutOfRange {
                field: "jump_strength",
                reason: "must be negative (an upward impulse)",
            });
        }
        if self.speed_start <= 0.0 {
            return Err(TuningError::OutOfRange {
                field: "speed_start",
                reason: "must be positive",
            });
        }
        if self.speed_step < 0.0 {
            return Err(TuningError::OutOfRange {
                field: "speed_step",
                reason: "must not be negative",
            });
        }
        if self.spawn_jitter < 0.0 {
            return Err(TuningError::OutOfRange {
                field: "spawn_jitter",
                reason: "must not be negative",
            });
        }
        if self.speed_threshold == 0 {
            return Err(TuningError::OutOfRange {
                field: "speed_threshold",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
