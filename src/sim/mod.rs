//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed cadence only (one step per scheduler tick)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Aabb, obstacle_aabb, player_aabb, player_hits_obstacle};
pub use state::{GamePhase, GameState, Obstacle, ObstacleKind, Player};
pub use tick::{GameEvent, TickInput, tick};
