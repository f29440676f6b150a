//! Cadence: a sequential micro-benchmark harness.
//!
//! Candidates and their statistics, the sequential harness that times
//! them, and the text renderers for its reports, reachable through one
//! dependency. The [`prelude`] brings in the names most benchmarks use.
//!
//! # Quick start
//!
//! ```rust
//! use cadence::prelude::*;
//!
//! let data: Vec<u64> = (0..1_000).collect();
//! let harness = BenchmarkHarness::new(HarnessConfig::default().with_repetitions(20));
//! let report = harness
//!     .run(vec![
//!         Candidate::new("iter_sum", || data.iter().sum::<u64>()),
//!         Candidate::new("loop_sum", || {
//!             let mut total = 0u64;
//!             for x in &data {
//!                 total += x;
//!             }
//!             total
//!         }),
//!         Candidate::fallible("parse", || "not a number".parse::<u64>()),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(report.get("iter_sum").unwrap().count, 20);
//! // Failures are counted and excluded, never reported as zero time.
//! let parse = report.get("parse").unwrap();
//! assert_eq!(parse.failures, 20);
//! assert!(parse.stats.is_none());
//!
//! println!("{}", render_table(&report, TableOptions::default()));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cadence-core` | Candidates, run results, summaries, errors |
//! | [`harness`] | `cadence-harness` | Configuration, clocks, the harness, reports |
//! | [`report`] | `cadence-report` | Table and box-plot rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, statistics, and errors (`cadence-core`).
pub use cadence_core as types;

/// Harness, configuration, clocks, and reports (`cadence-harness`).
pub use cadence_harness as harness;

/// Text rendering of reports (`cadence-report`).
pub use cadence_report as report;

/// Common imports for typical usage.
///
/// ```rust
/// use cadence::prelude::*;
/// ```
pub mod prelude {
    pub use cadence_core::{
        summarize, Candidate, CandidateError, ConfigError, Quantile, RunFailure, RunResult, Stats,
        Summary,
    };
    pub use cadence_harness::{
        run, time, BenchmarkHarness, Clock, HarnessConfig, MonotonicClock, Report, ReportOrder,
    };
    pub use cadence_report::{format_duration, render_boxplot, render_table, TableOptions};
}
