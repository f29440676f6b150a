//! Test utilities and fixture candidates for Cadence development.
//!
//! Provides a deterministic [`StepClock`], candidates with scripted
//! failure patterns, and builders for synthetic [`RunResult`] sets.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::time::Duration;

use cadence_core::RunResult;
use cadence_harness::Clock;

pub use fixtures::{always_fails, fails_on, panics_on, sleeper};

/// Clock that advances by a fixed step on every reading.
///
/// Each measured invocation takes two readings, so every successful
/// run measures exactly `step`.
pub struct StepClock {
    now: Cell<Duration>,
    step: Duration,
}

impl StepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            step,
        }
    }

    /// Number of readings taken so far.
    pub fn readings(&self) -> u64 {
        if self.step.is_zero() {
            return 0;
        }
        (self.now.get().as_nanos() / self.step.as_nanos()) as u64
    }
}

impl Clock for StepClock {
    fn now(&self) -> Duration {
        let t = self.now.get() + self.step;
        self.now.set(t);
        t
    }
}

/// Build run results from nanosecond values, indexed in order.
pub fn runs_from_nanos(label: &str, nanos: &[u64]) -> Vec<RunResult> {
    nanos
        .iter()
        .enumerate()
        .map(|(i, &n)| RunResult::new(label, Duration::from_nanos(n), i as u32))
        .collect()
}

/// `n` run results of identical duration.
pub fn constant_runs(label: &str, value: Duration, n: usize) -> Vec<RunResult> {
    (0..n)
        .map(|i| RunResult::new(label, value, i as u32))
        .collect()
}
