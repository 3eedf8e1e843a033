//! Axis-aligned filled rectangle object.
//!
//! The built-in object variant: a solid rectangle whose stored position is
//! its top-left corner. Its collision footprint is the rectangle itself,
//! with "lies entirely beyond" semantics for the boundary predicates.

use crate::error::EngineError;
use crate::events::EventPayload;
use crate::math::Vector2;
use crate::object::{Body, EVENT_DRAW, GameObject};
use crate::surface::{Color, RenderSurface};

/// A solid rectangle drawn with a single fill color.
#[derive(Debug)]
pub struct RectObject {
    body: Body,
    size: Vector2,
    color: Color,
}

impl RectObject {
    /// Create a rectangle with `position` as its top-left corner.
    pub fn new(position: Vector2, size: Vector2, color: Color) -> Self {
        Self {
            body: Body::new(position),
            size,
            color,
        }
    }

    /// Width and height of the rectangle.
    pub fn size(&self) -> Vector2 {
        self.size
    }

    /// Current fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Change the fill color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl GameObject for RectObject {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn draw(
        &mut self,
        surface: &mut dyn RenderSurface,
        absolute_ms: f64,
    ) -> Result<(), EngineError> {
        let t = absolute_ms - self.body.created_ms();
        let position = self.position_at(t);

        surface.set_fill_color(self.color);
        surface.fill_rect(position, self.size);

        self.body.events_mut().fire(EVENT_DRAW, &EventPayload::Drawn)
    }

    fn lies_left_of(&self, x: f64) -> bool {
        self.body.x() + self.size.x < x
    }

    fn lies_right_of(&self, x: f64) -> bool {
        self.body.x() > x
    }

    fn lies_above(&self, y: f64) -> bool {
        self.body.y() + self.size.y < y
    }

    fn lies_below(&self, y: f64) -> bool {
        self.body.y() > y
    }
}
