//! Raylib-backed render surface.
//!
//! Wraps any raylib draw target (the plain draw handle or a camera mode)
//! for the duration of one frame. Create it after `begin_drawing` and let
//! it drop before the handle ends the frame.

use raylib::prelude::{Color as RlColor, RaylibDraw};

use crate::math::Vector2;
use crate::surface::{Color, RenderSurface};

/// One-frame render surface over a raylib draw target.
pub struct RaylibSurface<'a, T: RaylibDraw> {
    target: &'a mut T,
    fill: Color,
}

impl<'a, T: RaylibDraw> RaylibSurface<'a, T> {
    /// Wrap a raylib draw target. The fill color starts out black.
    pub fn new(target: &'a mut T) -> Self {
        Self {
            target,
            fill: Color::BLACK,
        }
    }
}

impl<T: RaylibDraw> RenderSurface for RaylibSurface<'_, T> {
    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, position: Vector2, size: Vector2) {
        self.target.draw_rectangle(
            position.x as i32,
            position.y as i32,
            size.x as i32,
            size.y as i32,
            RlColor::new(self.fill.r, self.fill.g, self.fill.b, self.fill.a),
        );
    }
}
