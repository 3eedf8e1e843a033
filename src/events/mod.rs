//! Per-object event registry.
//!
//! Objects communicate with game code through named events fired from the
//! frame loop (`draw` after an object renders itself, `hit_edge` when the
//! integration step clamps it against a scene boundary). Handlers run
//! synchronously, in registration order.

pub mod hub;

pub use hub::{Axis, EventHub, EventPayload};
