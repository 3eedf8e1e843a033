//! Common state record shared by every game object.
//!
//! [`Body`] owns the kinematic state (position, velocity, accumulated force,
//! mass), the visibility/containment flags, the creation timestamp, and the
//! per-object event hub. Object types embed a `Body` and expose it through
//! [`GameObject::body`](super::GameObject::body).
//!
//! A force applied with a duration does not arm a timer: the expiry is
//! recorded as an elapsed-time threshold and rechecked lazily inside
//! [`force_at`](Body::force_at), so the whole step stays synchronous.

use crate::error::EngineError;
use crate::events::EventHub;
use crate::math::Vector2;
use crate::scene::clock;

/// Event fired on an object's hub after it draws itself.
pub const EVENT_DRAW: &str = "draw";
/// Event fired on an object's hub when an axis is clamped against a scene
/// edge during integration.
pub const EVENT_HIT_EDGE: &str = "hit_edge";

const DEFAULT_MASS: f64 = 100.0;

/// Kinematic state, flags, and event hub of one game object.
///
/// # Defaults
/// - velocity and force are zero
/// - `mass` is 100
/// - the object may escape the scene bounds (`can_escape_bounds = true`)
/// - the object is visible (`hidden = false`)
#[derive(Debug)]
pub struct Body {
    position: Vector2,
    velocity: Vector2,
    force: Vector2,
    /// Elapsed-ms threshold after which the accumulated force resets.
    force_expiry: Option<f64>,
    mass: f64,
    can_escape_bounds: bool,
    hidden: bool,
    created_ms: f64,
    events: EventHub,
}

impl Body {
    /// Create a body at `position` with default state and the `draw` and
    /// `hit_edge` events pre-registered.
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            velocity: Vector2::zero(),
            force: Vector2::zero(),
            force_expiry: None,
            mass: DEFAULT_MASS,
            can_escape_bounds: true,
            hidden: false,
            created_ms: clock::now_ms(),
            events: EventHub::new(&[EVENT_DRAW, EVENT_HIT_EDGE]),
        }
    }

    /// Stored position.
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Overwrite the stored position.
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// X coordinate of the stored position.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Y coordinate of the stored position.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Set the X coordinate of the stored position.
    pub fn set_x(&mut self, x: f64) {
        self.position.x = x;
    }

    /// Set the Y coordinate of the stored position.
    pub fn set_y(&mut self, y: f64) {
        self.position.y = y;
    }

    /// Stored velocity.
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Overwrite the stored velocity.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Mass of the object.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Set the mass. The value is not range-checked here; a mass that is
    /// not greater than zero makes the next integration step fail with
    /// [`EngineError::InvalidState`] instead of dividing by zero.
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    /// Whether the object is allowed to leave the scene bounds.
    pub fn can_escape_bounds(&self) -> bool {
        self.can_escape_bounds
    }

    /// Allow or forbid the object to leave the scene bounds.
    pub fn set_can_escape_bounds(&mut self, can_escape: bool) {
        self.can_escape_bounds = can_escape;
    }

    /// Whether the object is currently skipped by the draw pass.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Stop drawing the object. It keeps integrating.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// Draw the object again.
    pub fn show(&mut self) {
        self.hidden = false;
    }

    /// Creation timestamp on the engine clock, in milliseconds.
    pub fn created_ms(&self) -> f64 {
        self.created_ms
    }

    /// Milliseconds elapsed since the body was created.
    pub fn elapsed_ms(&self) -> f64 {
        clock::now_ms() - self.created_ms
    }

    /// Raw accumulated force, ignoring expiry.
    pub fn force(&self) -> Vector2 {
        self.force
    }

    /// Add `force` to the accumulated force vector.
    ///
    /// With `duration_ms = None` the force persists until something resets
    /// it. With `Some(d)` the whole accumulated force resets to zero once
    /// `d` milliseconds have elapsed, which models "apply an impulse for N
    /// milliseconds". A non-finite or non-positive duration is rejected.
    pub fn apply_force(
        &mut self,
        force: Vector2,
        duration_ms: Option<f64>,
    ) -> Result<(), EngineError> {
        if let Some(duration) = duration_ms {
            if !duration.is_finite() || duration <= 0.0 {
                return Err(EngineError::invalid_arguments(
                    "Vector2, positive duration in ms",
                    format!("Vector2, {duration}"),
                ));
            }
        }

        let t = self.elapsed_ms();
        self.expire_force(t);

        self.force += force;
        if let Some(duration) = duration_ms {
            self.force_expiry = Some(t + duration);
        }
        Ok(())
    }

    /// Force acting on the body at elapsed time `t` (ms since creation).
    ///
    /// Applies force decay: once `t` reaches the recorded expiry the stored
    /// force resets to zero and stays zero.
    pub fn force_at(&mut self, t: f64) -> Vector2 {
        self.expire_force(t);
        self.force
    }

    fn expire_force(&mut self, t: f64) {
        if let Some(expiry) = self.force_expiry {
            if t >= expiry {
                self.force = Vector2::zero();
                self.force_expiry = None;
            }
        }
    }

    /// The object's event hub.
    pub fn events(&self) -> &EventHub {
        &self.events
    }

    /// Mutable access to the object's event hub, for subscribing handlers.
    pub fn events_mut(&mut self) -> &mut EventHub {
        &mut self.events
    }
}
