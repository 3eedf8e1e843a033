//! Sine-wave oscillator object.
//!
//! Demonstrates the time-parameterized motion contract: instead of mutating
//! its position every frame, the oscillator overrides
//! [`position_at`](crate::object::GameObject::position_at) and lets the
//! frame loop sample the curve. The stored position stays at the anchor.

use std::f64::consts::TAU;

use crate::error::EngineError;
use crate::events::EventPayload;
use crate::math::Vector2;
use crate::object::{Body, EVENT_DRAW, GameObject};
use crate::surface::{Color, RenderSurface};

/// A rectangle swinging around an anchor point on a sine curve.
#[derive(Debug)]
pub struct Oscillator {
    body: Body,
    anchor: Vector2,
    amplitude: Vector2,
    period_ms: f64,
    size: Vector2,
    color: Color,
}

impl Oscillator {
    /// Create an oscillator centered on `anchor`, swinging `amplitude`
    /// units on each axis over one `period_ms`-long cycle.
    ///
    /// The period must be finite and positive.
    pub fn new(
        anchor: Vector2,
        amplitude: Vector2,
        period_ms: f64,
        size: Vector2,
        color: Color,
    ) -> Result<Self, EngineError> {
        if !period_ms.is_finite() || period_ms <= 0.0 {
            return Err(EngineError::invalid_arguments(
                "finite period in ms > 0",
                period_ms.to_string(),
            ));
        }
        Ok(Self {
            body: Body::new(anchor),
            anchor,
            amplitude,
            period_ms,
            size,
            color,
        })
    }

    fn footprint_origin(&self) -> Vector2 {
        self.position_at(self.body.elapsed_ms())
    }
}

impl GameObject for Oscillator {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn position_at(&self, t: f64) -> Vector2 {
        let swing = (t / self.period_ms * TAU).sin();
        self.anchor + Vector2::new(self.amplitude.x * swing, self.amplitude.y * swing)
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
        self.footprint_origin().x + self.size.x < x
    }

    fn lies_right_of(&self, x: f64) -> bool {
        self.footprint_origin().x > x
    }

    fn lies_above(&self, y: f64) -> bool {
        self.footprint_origin().y + self.size.y < y
    }

    fn lies_below(&self, y: f64) -> bool {
        self.footprint_origin().y > y
    }
}
