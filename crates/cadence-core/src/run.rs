//! Per-invocation records produced by the harness.

use std::time::Duration;

use crate::error::CandidateError;

/// One successful, measured execution of a candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    /// Label of the candidate that produced this run.
    pub label: String,
    /// Wall-clock time between the timestamps taken immediately before
    /// and after the invocation.
    pub elapsed: Duration,
    /// Zero-based position within the candidate's measured repetitions.
    pub index: u32,
}

impl RunResult {
    /// Construct a run result.
    pub fn new(label: impl Into<String>, elapsed: Duration, index: u32) -> Self {
        Self {
            label: label.into(),
            elapsed,
            index,
        }
    }
}

/// One failed execution of a candidate.
///
/// Failures carry no timing: a failed run never contributes to
/// statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunFailure {
    /// Label of the candidate that failed.
    pub label: String,
    /// Zero-based position within the candidate's measured repetitions.
    pub index: u32,
    /// What went wrong.
    pub error: CandidateError,
}
