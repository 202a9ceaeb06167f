//! Self-playing jump policy
//!
//! Drives demo sessions and soak tests: restarts whenever the game is not
//! running, and while running leaps when the obstacle's leading edge comes
//! within a speed-scaled lead distance. The lead is measured in steps so the
//! timing survives speed-ups.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;
use crate::consts::*;

/// Lead distance, in steps of travel, at which the default pilot jumps.
/// Eight steps of rise clears every catalog kind before its band arrives.
pub const DEFAULT_LEAD_STEPS: f32 = 8.0;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    lead_steps: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::with_lead(DEFAULT_LEAD_STEPS)
    }
}

impl Autopilot {
    /// A pilot that jumps `lead_steps` steps of travel before the obstacle
    /// reaches the player band. Short leads jump late and lose.
    pub fn with_lead(lead_steps: f32) -> Self {
        Self { lead_steps }
    }

    pub fn decide(&self, state: &GameState) -> TickInput {
        let activate = match state.phase {
            GamePhase::Idle | GamePhase::GameOver => true,
            GamePhase::Playing => {
                let front_gap = state.obstacle.x - (PLAYER_X + PLAYER_WIDTH);
                state.player.grounded()
                    && front_gap >= 0.0
                    && front_gap <= self.lead_steps * state.speed
            }
        };
        TickInput { activate }
    }
}
