//! Surface contract and scene composition
//!
//! The crate draws through the [`Surface`] trait and never owns a real
//! backend; hosts bring a canvas, a GPU pipeline, or the headless recorder.

pub mod headless;
pub mod scene;
pub mod sprite;

use glam::Vec2;

pub use scene::draw;
pub use sprite::{PlayerFrame, select_player_frame};

/// Screen-space rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Placeholder fill for sprites that are not loaded
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
}

/// The rendering surface contract. Implementations must tolerate being
/// called on every tick.
pub trait Surface {
    /// Decoded bitmap handle produced by the host's asset loader
    type Bitmap;

    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Blit `src` (bitmap pixels) into `dest` (screen pixels)
    fn draw_image(&mut self, bitmap: &Self::Bitmap, src: Rect, dest: Rect);

    /// Dashed line from `from` to `to` with the given on/off pattern,
    /// shifted by `phase` pixels along the line
    fn draw_dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], phase: f32);
}
