//! Candidates with scripted behavior.
//!
//! Call numbers are 1-based and count every invocation, warm-up
//! included.

use std::fmt;
use std::time::Duration;

use cadence_core::Candidate;

/// Error returned by scripted candidates.
#[derive(Debug)]
pub struct ScriptedFailure {
    pub call: u32,
}

impl fmt::Display for ScriptedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scripted failure on call {}", self.call)
    }
}

/// Fails (via `Err`) on the listed calls and succeeds otherwise.
pub fn fails_on(label: &str, calls: &[u32]) -> Candidate<'static> {
    let calls = calls.to_vec();
    let mut n = 0u32;
    Candidate::fallible(label, move || {
        n += 1;
        if calls.contains(&n) {
            Err(ScriptedFailure { call: n })
        } else {
            Ok(n)
        }
    })
}

/// Fails on every call.
pub fn always_fails(label: &str) -> Candidate<'static> {
    let mut n = 0u32;
    Candidate::fallible(label, move || -> Result<(), ScriptedFailure> {
        n += 1;
        Err(ScriptedFailure { call: n })
    })
}

/// Panics on the listed calls and succeeds otherwise.
pub fn panics_on(label: &str, calls: &[u32]) -> Candidate<'static> {
    let calls = calls.to_vec();
    let mut n = 0u32;
    Candidate::new(label, move || {
        n += 1;
        if calls.contains(&n) {
            panic!("scripted panic on call {n}");
        }
        n
    })
}

/// Sleeps for `d` on every call.
pub fn sleeper(label: &str, d: Duration) -> Candidate<'static> {
    Candidate::new(label, move || std::thread::sleep(d))
}
