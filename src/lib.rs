//! Universe2D library.
//!
//! A minimal 2D scene runtime: movable, drawable objects are integrated once
//! per animation frame, kept inside the scene bounds, and notified of draw
//! and edge-collision events through per-object hooks.

pub mod config;
pub mod error;
pub mod events;
pub mod math;
pub mod object;
pub mod scene;
pub mod surface;
pub mod tasks;
