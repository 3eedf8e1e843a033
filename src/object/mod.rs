//! Game objects: the per-entity state record, the overridable behavior
//! hooks, and the per-frame integration step.
//!
//! An object type embeds a [`Body`] and implements [`GameObject`]. The four
//! boundary predicates describe the object's collision footprint against a
//! vertical or horizontal line ("lies entirely beyond"); `draw` renders the
//! object through the surface contract. Motion hooks (`position_at`,
//! `velocity_at`, `force_at`) default to the stored state and can be
//! overridden to express time-parameterized motion curves.

pub mod body;
pub mod oscillator;
pub mod rectangle;

pub use body::{Body, EVENT_DRAW, EVENT_HIT_EDGE};
pub use oscillator::Oscillator;
pub use rectangle::RectObject;

use crate::error::EngineError;
use crate::events::{Axis, EventPayload};
use crate::math::Vector2;
use crate::surface::RenderSurface;

/// A positioned, optionally visible object integrated and drawn once per
/// frame by the scene that owns it.
pub trait GameObject {
    /// The object's common state record.
    fn body(&self) -> &Body;

    /// Mutable access to the common state record.
    fn body_mut(&mut self) -> &mut Body;

    /// Position at elapsed time `t` (ms since creation). Defaults to the
    /// stored position; override to implement a motion curve.
    fn position_at(&self, t: f64) -> Vector2 {
        let _ = t;
        self.body().position()
    }

    /// Velocity at elapsed time `t` (ms since creation). Defaults to the
    /// stored velocity.
    fn velocity_at(&self, t: f64) -> Vector2 {
        let _ = t;
        self.body().velocity()
    }

    /// Force acting on the object at elapsed time `t` (ms since creation).
    /// The default applies force decay through [`Body::force_at`].
    fn force_at(&mut self, t: f64) -> Vector2 {
        self.body_mut().force_at(t)
    }

    /// Render the object onto `surface` at absolute engine time
    /// `absolute_ms`, then fire the `draw` event on the object's hub.
    ///
    /// The default implementation fails with
    /// [`EngineError::NotImplemented`].
    fn draw(
        &mut self,
        surface: &mut dyn RenderSurface,
        absolute_ms: f64,
    ) -> Result<(), EngineError> {
        let _ = (surface, absolute_ms);
        Err(EngineError::not_implemented("draw"))
    }

    /// Whether the object lies entirely to the left of the vertical line at
    /// `x`.
    fn lies_left_of(&self, x: f64) -> bool;

    /// Whether the object lies entirely to the right of the vertical line
    /// at `x`.
    fn lies_right_of(&self, x: f64) -> bool;

    /// Whether the object lies entirely above the horizontal line at `y`.
    fn lies_above(&self, y: f64) -> bool;

    /// Whether the object lies entirely below the horizontal line at `y`.
    fn lies_below(&self, y: f64) -> bool;

    /// One explicit-Euler physics step. Called by the owning scene once per
    /// frame; not intended to be called from game code.
    ///
    /// `delta` is a frame-rate-normalized timestep (elapsed seconds times
    /// the scene's target frame rate), so motion speed is independent of the
    /// actual wall-clock frame rate.
    ///
    /// When the object may not escape the bounds, each axis is tested
    /// independently: a crossed edge zeroes the velocity component on that
    /// axis and fires `hit_edge` with the axis, leaving the other axis
    /// untouched.
    fn integrate(&mut self, bounds: Vector2, delta: f64) -> Result<(), EngineError> {
        let mass = self.body().mass();
        if !(mass > 0.0) {
            return Err(EngineError::invalid_state(format!(
                "mass must be greater than zero to integrate, found {mass}"
            )));
        }

        let t = self.body().elapsed_ms();
        let force = self.force_at(t);
        {
            let body = self.body_mut();
            let velocity = body.velocity() + force * (delta / mass);
            body.set_velocity(velocity);
        }

        let mut velocity = self.velocity_at(t);

        if !self.body().can_escape_bounds() {
            let crossed_x = self.lies_left_of(0.0) || self.lies_right_of(bounds.x);
            let crossed_y = self.lies_above(0.0) || self.lies_below(bounds.y);

            if crossed_x {
                velocity.x = 0.0;
                let body = self.body_mut();
                let mut stored = body.velocity();
                stored.x = 0.0;
                body.set_velocity(stored);
                body.events_mut()
                    .fire(EVENT_HIT_EDGE, &EventPayload::EdgeHit(Axis::X))?;
            }
            if crossed_y {
                velocity.y = 0.0;
                let body = self.body_mut();
                let mut stored = body.velocity();
                stored.y = 0.0;
                body.set_velocity(stored);
                body.events_mut()
                    .fire(EVENT_HIT_EDGE, &EventPayload::EdgeHit(Axis::Y))?;
            }
        }

        let body = self.body_mut();
        let position = body.position() + velocity * delta;
        body.set_position(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Minimal object with scriptable boundary predicates.
    struct Probe {
        body: Body,
        beyond_x: bool,
        beyond_y: bool,
    }

    impl Probe {
        fn new(position: Vector2) -> Self {
            Self {
                body: Body::new(position),
                beyond_x: false,
                beyond_y: false,
            }
        }
    }

    impl GameObject for Probe {
        fn body(&self) -> &Body {
            &self.body
        }

        fn body_mut(&mut self) -> &mut Body {
            &mut self.body
        }

        fn lies_left_of(&self, _x: f64) -> bool {
            false
        }

        fn lies_right_of(&self, _x: f64) -> bool {
            self.beyond_x
        }

        fn lies_above(&self, _y: f64) -> bool {
            false
        }

        fn lies_below(&self, _y: f64) -> bool {
            self.beyond_y
        }
    }

    const BOUNDS: Vector2 = Vector2::new(100.0, 100.0);

    #[test]
    fn test_integrate_moves_by_velocity_times_delta() {
        let mut probe = Probe::new(Vector2::new(0.0, 0.0));
        probe.body_mut().set_velocity(Vector2::new(10.0, -2.0));

        probe.integrate(BOUNDS, 0.5).unwrap();

        assert_eq!(probe.body().position(), Vector2::new(5.0, -1.0));
    }

    #[test]
    fn test_integrate_applies_force_over_mass() {
        let mut probe = Probe::new(Vector2::zero());
        probe.body_mut().set_mass(2.0);
        probe.body_mut().apply_force(Vector2::new(8.0, 0.0), None).unwrap();

        probe.integrate(BOUNDS, 1.0).unwrap();

        // dv = force * delta / mass = (8, 0) / 2
        assert_eq!(probe.body().velocity(), Vector2::new(4.0, 0.0));
        assert_eq!(probe.body().position(), Vector2::new(4.0, 0.0));
    }

    #[test]
    fn test_integrate_rejects_non_positive_mass() {
        for bad in [0.0, -1.0, f64::NAN] {
            let mut probe = Probe::new(Vector2::new(1.0, 1.0));
            probe.body_mut().set_velocity(Vector2::new(1.0, 0.0));
            probe.body_mut().set_mass(bad);

            let result = probe.integrate(BOUNDS, 1.0);

            assert!(matches!(result, Err(EngineError::InvalidState { .. })));
            // Nothing moved and no NaN leaked into the position.
            assert_eq!(probe.body().position(), Vector2::new(1.0, 1.0));
        }
    }

    #[test]
    fn test_crossed_x_axis_zeroes_velocity_and_fires_event() {
        let mut probe = Probe::new(Vector2::new(95.0, 50.0));
        probe.body_mut().set_velocity(Vector2::new(10.0, 3.0));
        probe.body_mut().set_can_escape_bounds(false);
        probe.beyond_x = true;

        let hits = Rc::new(RefCell::new(Vec::new()));
        {
            let hits = Rc::clone(&hits);
            probe
                .body_mut()
                .events_mut()
                .on(EVENT_HIT_EDGE, move |payload| {
                    if let EventPayload::EdgeHit(axis) = payload {
                        hits.borrow_mut().push(*axis);
                    }
                })
                .unwrap();
        }

        probe.integrate(BOUNDS, 1.0).unwrap();

        assert_eq!(probe.body().velocity(), Vector2::new(0.0, 3.0));
        // X is pinned, Y still moves.
        assert_eq!(probe.body().position(), Vector2::new(95.0, 53.0));
        assert_eq!(*hits.borrow(), vec![Axis::X]);
    }

    #[test]
    fn test_both_axes_clamp_independently() {
        let mut probe = Probe::new(Vector2::new(95.0, 95.0));
        probe.body_mut().set_velocity(Vector2::new(10.0, 10.0));
        probe.body_mut().set_can_escape_bounds(false);
        probe.beyond_x = true;
        probe.beyond_y = true;

        probe.integrate(BOUNDS, 1.0).unwrap();

        assert_eq!(probe.body().velocity(), Vector2::zero());
        assert_eq!(probe.body().position(), Vector2::new(95.0, 95.0));
    }

    #[test]
    fn test_escaping_object_ignores_bounds() {
        let mut probe = Probe::new(Vector2::new(95.0, 50.0));
        probe.body_mut().set_velocity(Vector2::new(10.0, 0.0));
        probe.beyond_x = true; // would clamp, but escape is allowed

        probe.integrate(BOUNDS, 1.0).unwrap();

        assert_eq!(probe.body().position(), Vector2::new(105.0, 50.0));
        assert_eq!(probe.body().velocity(), Vector2::new(10.0, 0.0));
    }

    #[test]
    fn test_default_draw_is_not_implemented() {
        struct NullSurface;
        impl RenderSurface for NullSurface {
            fn set_fill_color(&mut self, _color: crate::surface::Color) {}
            fn fill_rect(&mut self, _position: Vector2, _size: Vector2) {}
        }

        let mut probe = Probe::new(Vector2::zero());
        let result = probe.draw(&mut NullSurface, 0.0);
        assert!(matches!(result, Err(EngineError::NotImplemented { .. })));
    }
}
