//! The benchmark harness: sequential execution followed by aggregation.
//!
//! # Execution model
//!
//! Candidates run strictly one at a time on the calling thread, in the
//! order supplied. Each candidate first runs its warm-up invocations
//! (if configured), then its measured repetitions back to back. A
//! measured invocation is bracketed by two clock readings taken
//! immediately before the call and immediately after it returns;
//! everything the candidate does in between, blocking included, is
//! part of the measurement. Timer overhead is not subtracted.
//!
//! A failing invocation (an `Err` return, or a panic when
//! [`catch_panics`](HarnessConfig::catch_panics) is set) is recorded as
//! a [`RunFailure`] and excluded from statistics. Execution continues
//! with the remaining repetitions and candidates.
//!
//! There is no timeout: a candidate that never returns hangs the run.

use std::panic::{self, AssertUnwindSafe};

use cadence_core::{Candidate, CandidateError, ConfigError, RunFailure, RunResult, Summary};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::clock::{Clock, MonotonicClock};
use crate::config::HarnessConfig;
use crate::report::Report;

/// Per-label accumulator. Candidates sharing a label share one tally.
#[derive(Default)]
struct Tally {
    runs: Vec<RunResult>,
    failures: usize,
    warmup_runs: usize,
    warmup_failures: usize,
}

/// Runs candidates and aggregates their timings.
///
/// Generic over the [`Clock`] so tests can substitute a deterministic
/// time source; the default is [`MonotonicClock`].
#[derive(Debug)]
pub struct BenchmarkHarness<C: Clock = MonotonicClock> {
    config: HarnessConfig,
    clock: C,
}

impl BenchmarkHarness<MonotonicClock> {
    /// Create a harness timing with the wall clock.
    pub fn new(config: HarnessConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> BenchmarkHarness<C> {
    /// Create a harness timing with `clock`.
    pub fn with_clock(config: HarnessConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// The harness configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run every candidate and summarize the results.
    ///
    /// Fails with [`ConfigError`] before invoking anything if the
    /// candidate list is empty or the configuration is invalid. Every
    /// other problem is reported through the returned [`Report`].
    pub fn run(&self, mut candidates: Vec<Candidate<'_>>) -> Result<Report, ConfigError> {
        if candidates.is_empty() {
            return Err(ConfigError::NoCandidates);
        }
        self.config.validate()?;
        let repetitions = u32::try_from(self.config.repetitions).map_err(|_| {
            ConfigError::TooManyRepetitions {
                requested: self.config.repetitions,
            }
        })?;

        let mut tallies: IndexMap<String, Tally> = IndexMap::new();
        let mut failures = Vec::new();

        for candidate in &mut candidates {
            let label = candidate.label().to_string();
            let tally = tallies.entry(label.clone()).or_default();
            debug!(
                label = %label,
                repetitions,
                warmup = self.config.warmup,
                "benchmarking candidate"
            );

            for index in 0..self.config.warmup {
                tally.warmup_runs += 1;
                if let Err(error) = self.invoke(candidate) {
                    tally.warmup_failures += 1;
                    debug!(label = %label, index, %error, "warm-up invocation failed");
                }
            }

            let successes_before = tally.runs.len();
            let failures_before = tally.failures;
            for index in 0..repetitions {
                let start = self.clock.now();
                let outcome = self.invoke(candidate);
                let end = self.clock.now();
                match outcome {
                    Ok(()) => {
                        let elapsed = end.saturating_sub(start);
                        tally.runs.push(RunResult::new(label.clone(), elapsed, index));
                    }
                    Err(error) => {
                        warn!(label = %label, index, %error, "candidate invocation failed");
                        tally.failures += 1;
                        failures.push(RunFailure {
                            label: label.clone(),
                            index,
                            error,
                        });
                    }
                }
            }

            let succeeded = tally.runs.len() - successes_before;
            let failed = tally.failures - failures_before;
            if succeeded == 0 {
                warn!(label = %label, failed, "candidate produced no successful samples");
            } else {
                debug!(label = %label, succeeded, failed, "candidate finished");
            }
        }

        let mut summaries = IndexMap::with_capacity(tallies.len());
        let mut runs = IndexMap::with_capacity(tallies.len());
        for (label, tally) in tallies {
            let summary = Summary::from_runs(label.clone(), &tally.runs, &self.config.quantiles)
                .with_failures(tally.failures)
                .with_warmup(tally.warmup_runs, tally.warmup_failures);
            summaries.insert(label.clone(), summary);
            runs.insert(label, tally.runs);
        }

        Ok(Report {
            summaries,
            runs,
            failures,
            repetitions,
        })
    }

    fn invoke(&self, candidate: &mut Candidate<'_>) -> Result<(), CandidateError> {
        if self.config.catch_panics {
            panic::catch_unwind(AssertUnwindSafe(|| candidate.invoke()))
                .unwrap_or_else(|payload| Err(CandidateError::from_panic(payload)))
        } else {
            candidate.invoke()
        }
    }
}

/// Run `candidates` `repetitions` times each with the default
/// configuration and the wall clock.
pub fn run(candidates: Vec<Candidate<'_>>, repetitions: u64) -> Result<Report, ConfigError> {
    BenchmarkHarness::new(HarnessConfig::default().with_repetitions(repetitions)).run(candidates)
}
