//! Engine clock.
//!
//! One monotonic millisecond clock shared by scenes and object bodies, so
//! creation timestamps, elapsed times, and frame deltas all live on the
//! same timebase.

use std::sync::LazyLock;
use std::time::Instant;

static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Milliseconds since the engine clock was first read in this process.
pub fn now_ms() -> f64 {
    EPOCH.elapsed().as_secs_f64() * 1000.0
}
