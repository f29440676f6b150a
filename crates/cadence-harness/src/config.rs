//! Harness configuration and validation.

use cadence_core::{ConfigError, Quantile, DEFAULT_QUANTILES};
use smallvec::SmallVec;

/// Settings for a [`BenchmarkHarness`](crate::BenchmarkHarness).
///
/// [`validate()`](HarnessConfig::validate) is called by the harness
/// before any candidate runs.
#[derive(Clone, Debug, PartialEq)]
pub struct HarnessConfig {
    /// Measured invocations per candidate. Default: 100. Minimum: 1.
    pub repetitions: u64,
    /// Warm-up invocations per candidate, run before measurement and
    /// reported separately. Default: 0.
    pub warmup: u32,
    /// Quantiles included in each summary. Default: p25, p75, p95.
    pub quantiles: SmallVec<[Quantile; 4]>,
    /// Treat a panicking candidate as a failed invocation instead of
    /// unwinding out of the harness. Default: `true`.
    pub catch_panics: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            repetitions: 100,
            warmup: 0,
            quantiles: SmallVec::from_slice(&DEFAULT_QUANTILES),
            catch_panics: true,
        }
    }
}

impl HarnessConfig {
    /// Set the measured repetition count.
    pub fn with_repetitions(mut self, repetitions: u64) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Set the warm-up count.
    pub fn with_warmup(mut self, warmup: u32) -> Self {
        self.warmup = warmup;
        self
    }

    /// Replace the reported quantiles.
    pub fn with_quantiles(mut self, quantiles: &[Quantile]) -> Self {
        self.quantiles = SmallVec::from_slice(quantiles);
        self
    }

    /// Set whether panics are caught.
    pub fn with_catch_panics(mut self, catch_panics: bool) -> Self {
        self.catch_panics = catch_panics;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repetitions == 0 {
            return Err(ConfigError::ZeroRepetitions);
        }
        if u32::try_from(self.repetitions).is_err() {
            return Err(ConfigError::TooManyRepetitions {
                requested: self.repetitions,
            });
        }
        Ok(())
    }
}
