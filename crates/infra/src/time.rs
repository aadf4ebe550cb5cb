//! Clock adapters

use std::time::Instant;

use parcelsort_core::Clock;

/// Monotonic wall-independent clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
