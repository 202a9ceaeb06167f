//! Call-recording surface for headless runs and tests

use glam::Vec2;

use super::{Color, Rect, Surface};

/// Counts draw calls instead of drawing. `Bitmap = ()` pairs with any
/// loader that produces unit handles.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    pub clears: u64,
    pub rects: u64,
    pub images: u64,
    pub lines: u64,
    pub last_line_phase: Option<f32>,
}

impl Surface for HeadlessSurface {
    type Bitmap = ();

    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
    }

    fn fill_rect(&mut self, _rect: Rect, _color: Color) {
        self.rects += 1;
    }

    fn draw_image(&mut self, _bitmap: &(), _src: Rect, _dest: Rect) {
        self.images += 1;
    }

    fn draw_dashed_line(&mut self, _from: Vec2, _to: Vec2, _dash: [f32; 2], phase: f32) {
        self.lines += 1;
        self.last_line_phase = Some(phase);
    }
}
