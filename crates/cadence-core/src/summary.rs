//! Aggregated statistics over a candidate's runs.
//!
//! [`Summary`] is always derived from a set of [`RunResult`]s by
//! [`Summary::from_runs`] (or the [`summarize`] shorthand). It is never
//! updated incrementally. An empty run set produces a summary whose
//! [`stats`](Summary::stats) is `None`: "no samples" is structurally
//! distinct from "took zero time".
//!
//! All statistics are computed over the sorted sample, so the result is
//! independent of the order the runs were supplied in.

use std::fmt;
use std::time::Duration;

use smallvec::SmallVec;

use crate::error::ConfigError;
use crate::run::RunResult;

// ── Quantile ───────────────────────────────────────────────────────

/// A probability in `[0, 1]` selecting a point of the sample distribution.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantile(f64);

impl Quantile {
    /// Lower quartile.
    pub const P25: Self = Self(0.25);
    /// Median.
    pub const P50: Self = Self(0.50);
    /// Upper quartile.
    pub const P75: Self = Self(0.75);
    /// 95th percentile.
    pub const P95: Self = Self(0.95);
    /// 99th percentile.
    pub const P99: Self = Self(0.99);

    /// Create a quantile, rejecting NaN and values outside `[0, 1]`.
    pub fn new(p: f64) -> Result<Self, ConfigError> {
        if (0.0..=1.0).contains(&p) {
            Ok(Self(p))
        } else {
            Err(ConfigError::InvalidQuantile { value: p })
        }
    }

    /// The probability as a plain `f64`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Quantile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = (self.0 * 1000.0).round() / 10.0;
        if pct.fract() == 0.0 {
            write!(f, "p{pct:.0}")
        } else {
            write!(f, "p{pct:.1}")
        }
    }
}

/// Quantiles reported when the caller does not choose any.
pub const DEFAULT_QUANTILES: [Quantile; 3] = [Quantile::P25, Quantile::P75, Quantile::P95];

/// A quantile together with its value in a particular sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuantileValue {
    /// Which quantile.
    pub quantile: Quantile,
    /// Interpolated sample value.
    pub value: Duration,
}

// ── Stats ──────────────────────────────────────────────────────────

/// Statistics over a non-empty sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    /// Arithmetic mean.
    pub mean: Duration,
    /// Sorted midpoint; mean of the two middle values for even counts.
    pub median: Duration,
    /// Fastest run.
    pub min: Duration,
    /// Slowest run.
    pub max: Duration,
    /// Sample standard deviation. `None` with fewer than two samples.
    pub std_dev: Option<Duration>,
    /// Requested quantiles, in request order.
    pub quantiles: SmallVec<[QuantileValue; 4]>,
}

impl Stats {
    /// Compute statistics over `sorted`, which must be non-empty and
    /// sorted ascending.
    fn from_sorted(sorted: &[Duration], quantiles: &[Quantile]) -> Self {
        let n = sorted.len();
        debug_assert!(n > 0);

        let total: u128 = sorted.iter().map(Duration::as_nanos).sum();
        let mean = nanos_to_duration(total / n as u128);

        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            let lo = sorted[n / 2 - 1].as_nanos();
            let hi = sorted[n / 2].as_nanos();
            nanos_to_duration((lo + hi) / 2)
        };

        let std_dev = if n >= 2 {
            let mean_s = total as f64 / n as f64 / 1e9;
            let ss: f64 = sorted
                .iter()
                .map(|d| {
                    let dev = d.as_secs_f64() - mean_s;
                    dev * dev
                })
                .sum();
            Some(Duration::from_secs_f64((ss / (n - 1) as f64).sqrt()))
        } else {
            None
        };

        let quantiles = quantiles
            .iter()
            .map(|&q| QuantileValue {
                quantile: q,
                value: interpolate(sorted, q.get()),
            })
            .collect();

        Self {
            mean,
            median,
            min: sorted[0],
            max: sorted[n - 1],
            std_dev,
            quantiles,
        }
    }

    /// Look up a previously computed quantile.
    pub fn quantile(&self, q: Quantile) -> Option<Duration> {
        self.quantiles
            .iter()
            .find(|qv| qv.quantile == q)
            .map(|qv| qv.value)
    }
}

/// Linear interpolation between the order statistics bracketing
/// rank `(n - 1) * p`.
fn interpolate(sorted: &[Duration], p: f64) -> Duration {
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    if lo == hi || frac == 0.0 {
        return sorted[lo];
    }
    let base = sorted[lo].as_nanos();
    let gap = (sorted[hi].as_nanos() - base) as f64;
    nanos_to_duration(base + (gap * frac).round() as u128)
}

fn nanos_to_duration(nanos: u128) -> Duration {
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

// ── Summary ────────────────────────────────────────────────────────

/// Aggregated timing statistics for one candidate label.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// Candidate label.
    pub label: String,
    /// Number of successful measured runs.
    pub count: usize,
    /// Number of measured runs that failed and were excluded.
    pub failures: usize,
    /// Warm-up invocations executed before measurement (any outcome).
    pub warmup_runs: usize,
    /// Warm-up invocations that failed.
    pub warmup_failures: usize,
    /// Statistics over the successful runs; `None` when `count == 0`.
    pub stats: Option<Stats>,
}

impl Summary {
    /// Summarize `runs` under `label`, reporting the given quantiles.
    ///
    /// Failure and warm-up counters start at zero; the harness fills
    /// them in with [`with_failures`](Self::with_failures) and
    /// [`with_warmup`](Self::with_warmup).
    pub fn from_runs(label: impl Into<String>, runs: &[RunResult], quantiles: &[Quantile]) -> Self {
        let stats = if runs.is_empty() {
            None
        } else {
            let mut sorted: Vec<Duration> = runs.iter().map(|r| r.elapsed).collect();
            sorted.sort_unstable();
            Some(Stats::from_sorted(&sorted, quantiles))
        };
        Self {
            label: label.into(),
            count: runs.len(),
            failures: 0,
            warmup_runs: 0,
            warmup_failures: 0,
            stats,
        }
    }

    /// Set the number of excluded, failed runs.
    pub fn with_failures(mut self, failures: usize) -> Self {
        self.failures = failures;
        self
    }

    /// Set the warm-up counters.
    pub fn with_warmup(mut self, runs: usize, failures: usize) -> Self {
        self.warmup_runs = runs;
        self.warmup_failures = failures;
        self
    }

    /// Total measured attempts: successes plus failures.
    pub fn attempts(&self) -> usize {
        self.count + self.failures
    }

    /// `true` when at least one run was attempted and none succeeded.
    pub fn all_failed(&self) -> bool {
        self.count == 0 && self.failures > 0
    }

    /// Mean of the successful runs, if any.
    pub fn mean(&self) -> Option<Duration> {
        self.stats.as_ref().map(|s| s.mean)
    }

    /// Median of the successful runs, if any.
    pub fn median(&self) -> Option<Duration> {
        self.stats.as_ref().map(|s| s.median)
    }
}

/// Summarize a run set with the [`DEFAULT_QUANTILES`].
///
/// The label is taken from the first run; an empty input yields an
/// empty label, `count == 0` and no statistics.
pub fn summarize(runs: &[RunResult]) -> Summary {
    let label = runs.first().map(|r| r.label.as_str()).unwrap_or_default();
    Summary::from_runs(label, runs, &DEFAULT_QUANTILES)
}
