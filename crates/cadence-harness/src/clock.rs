//! Time sources for the harness.

use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// `now()` returns the time elapsed since an arbitrary, fixed origin.
/// The harness only ever subtracts two readings, so the origin does not
/// matter. Implementations must never go backwards.
pub trait Clock {
    /// Current reading.
    fn now(&self) -> Duration;
}

/// Wall-clock time via [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Time a single call, returning its output and the elapsed wall time.
///
/// ```
/// let (v, elapsed) = cadence_harness::time(|| (1..=10u32).product::<u32>());
/// assert_eq!(v, 3_628_800);
/// assert!(elapsed.as_secs() < 1);
/// ```
pub fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}
