//! Sprite-frame selection
//!
//! Pure mapping from simulation state to sheet rectangles; no surface or
//! asset access here.

use super::Rect;
use crate::assets::SpriteId;
use crate::consts::*;
use crate::sim::{GamePhase, ObstacleKind};

/// Frame width in the runner's sheet (frames sit side by side on one row)
const SHEET_FRAME_W: f32 = 36.0;
const SHEET_FRAME_H: f32 = 50.0;

/// The runner's four sheet frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerFrame {
    Run0,
    Run1,
    Jump,
    Dead,
}

impl PlayerFrame {
    /// Source rectangle within the sheet
    pub fn src_rect(self) -> Rect {
        let index = match self {
            PlayerFrame::Run0 => 0.0,
            PlayerFrame::Run1 => 1.0,
            PlayerFrame::Jump => 2.0,
            PlayerFrame::Dead => 3.0,
        };
        Rect::new(index * SHEET_FRAME_W, 0.0, SHEET_FRAME_W, SHEET_FRAME_H)
    }
}

/// Select the runner's frame: dead when the session is over, the jump pose
/// while airborne, otherwise the two run frames alternating every
/// [`RUN_FRAME_PERIOD`] steps.
pub fn select_player_frame(phase: GamePhase, airborne: bool, frame_count: u64) -> PlayerFrame {
    if phase == GamePhase::GameOver {
        PlayerFrame::Dead
    } else if airborne {
        PlayerFrame::Jump
    } else if (frame_count / RUN_FRAME_PERIOD) % 2 == 0 {
        PlayerFrame::Run0
    } else {
        PlayerFrame::Run1
    }
}

/// Which sprite draws a given obstacle kind. Exhaustive, so a new catalog
/// entry cannot ship without its sprite mapping.
pub fn obstacle_sprite(kind: ObstacleKind) -> SpriteId {
    match kind {
        ObstacleKind::Candle1 => SpriteId::Candle1,
        ObstacleKind::Candle2 => SpriteId::Candle2,
        ObstacleKind::Candle3 => SpriteId::Candle3,
        ObstacleKind::Fisher => SpriteId::Fisher,
    }
}
