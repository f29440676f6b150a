//! Sequential micro-benchmark harness.
//!
//! [`BenchmarkHarness`] runs each [`Candidate`](cadence_core::Candidate)
//! a configured number of times, one candidate at a time, timing every
//! invocation with a [`Clock`]. Failed invocations are counted and
//! excluded; only an invalid configuration aborts a run. The result is a
//! [`Report`] keyed by candidate label in first-appearance order.
//!
//! # Example
//!
//! ```
//! use cadence_core::Candidate;
//! use cadence_harness::run;
//!
//! let data: Vec<u64> = (0..256).collect();
//! let report = run(
//!     vec![
//!         Candidate::new("iter", || data.iter().sum::<u64>()),
//!         Candidate::new("fold", || data.iter().fold(0u64, |a, b| a + b)),
//!     ],
//!     10,
//! )
//! .unwrap();
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.get("iter").unwrap().count, 10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod harness;
pub mod report;

pub use clock::{time, Clock, MonotonicClock};
pub use config::HarnessConfig;
pub use harness::{run, BenchmarkHarness};
pub use report::{Report, ReportOrder};
