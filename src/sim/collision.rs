//! Axis-aligned collision detection
//!
//! The player occupies a fixed horizontal band; obstacles are anchored to
//! the ground line. Overlap must be strictly positive on both axes -
//! touching at a boundary is not a collision.

use glam::Vec2;

use super::state::{Obstacle, Player};
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap test: both axes must overlap with non-zero extent.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The player's box at its fixed horizontal band
pub fn player_aabb(player: &Player) -> Aabb {
    Aabb::from_pos_size(
        Vec2::new(PLAYER_X, player.y),
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
    )
}

/// The obstacle's ground-anchored box
pub fn obstacle_aabb(obstacle: &Obstacle) -> Aabb {
    let w = obstacle.kind.width();
    let h = obstacle.kind.height();
    Aabb::from_pos_size(Vec2::new(obstacle.x, GROUND_Y - h), Vec2::new(w, h))
}

pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle) -> bool {
    player_aabb(player).overlaps(&obstacle_aabb(obstacle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle {
            x,
            kind: ObstacleKind::Candle1,
        }
    }

    #[test]
    fn grounded_player_hits_overlapping_obstacle() {
        let player = Player::default();
        // Obstacle fully inside the player band
        assert!(player_hits_obstacle(&player, &obstacle_at(60.0)));
    }

    #[test]
    fn boundary_touch_is_not_a_collision() {
        let player = Player::default();
        let w = ObstacleKind::Candle1.width();

        // Trailing edge exactly at the player's left edge
        assert!(!player_hits_obstacle(&player, &obstacle_at(PLAYER_X - w)));
        // Leading edge exactly at the player's right edge
        assert!(!player_hits_obstacle(
            &player,
            &obstacle_at(PLAYER_X + PLAYER_WIDTH)
        ));
        // One pixel further in on each side does collide
        assert!(player_hits_obstacle(&player, &obstacle_at(PLAYER_X - w + 1.0)));
        assert!(player_hits_obstacle(
            &player,
            &obstacle_at(PLAYER_X + PLAYER_WIDTH - 1.0)
        ));
    }

    #[test]
    fn airborne_player_clears_obstacle_below() {
        let mut player = Player::default();
        // High enough that the bottom edge sits exactly on the obstacle top
        let h = ObstacleKind::Candle1.height();
        player.y = GROUND_Y - h - PLAYER_HEIGHT;
        assert!(!player_hits_obstacle(&player, &obstacle_at(60.0)));

        // Dip one pixel into the obstacle band
        player.y += 1.0;
        assert!(player_hits_obstacle(&player, &obstacle_at(60.0)));
    }

    #[test]
    fn vertical_band_is_ground_anchored() {
        let obstacle = obstacle_at(60.0);
        let bb = obstacle_aabb(&obstacle);
        assert_eq!(bb.max.y, GROUND_Y);
        assert_eq!(bb.min.y, GROUND_Y - obstacle.kind.height());
    }
}
