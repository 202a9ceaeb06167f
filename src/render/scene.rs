//! One frame's draw pass
//!
//! Reads state, never mutates it. Sprites that are not loaded degrade to
//! solid placeholder rectangles at the same position and size.

use glam::Vec2;

use super::sprite::{obstacle_sprite, select_player_frame};
use super::{Color, Rect, Surface};
use crate::assets::{AssetStore, SpriteId};
use crate::consts::*;
use crate::sim::GameState;

pub fn draw<S: Surface>(state: &GameState, assets: &AssetStore<S::Bitmap>, surface: &mut S) {
    surface.clear(GAME_WIDTH, GAME_HEIGHT);

    // Scrolling ground line. The offset accumulates unbounded in the sim;
    // only its phase within the dash period matters here.
    let dash_period = GROUND_DASH[0] + GROUND_DASH[1];
    surface.draw_dashed_line(
        Vec2::new(0.0, GROUND_Y),
        Vec2::new(GAME_WIDTH, GROUND_Y),
        GROUND_DASH,
        state.ground_offset % dash_period,
    );

    let kind = state.obstacle.kind;
    let dest = Rect::new(
        state.obstacle.x,
        GROUND_Y - kind.height(),
        kind.width(),
        kind.height(),
    );
    match assets.get(obstacle_sprite(kind)) {
        Some(bitmap) => {
            let src = Rect::new(0.0, 0.0, kind.width(), kind.height());
            surface.draw_image(bitmap, src, dest);
        }
        None => surface.fill_rect(dest, Color::RED),
    }

    let dest = Rect::new(PLAYER_X, state.player.y, PLAYER_WIDTH, PLAYER_HEIGHT);
    match assets.get(SpriteId::Shiba) {
        Some(bitmap) => {
            let frame = select_player_frame(state.phase, state.player.airborne(), state.frame_count);
            surface.draw_image(bitmap, frame.src_rect(), dest);
        }
        None => surface.fill_rect(dest, Color::RED),
    }
}
