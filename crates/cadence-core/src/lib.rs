//! Core types and statistics for the Cadence benchmarking harness.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model shared by the rest of the workspace: candidates,
//! per-run results, summaries, and error types. The [`summarize`]
//! function lives here because it is a pure function of run results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod candidate;
pub mod error;
pub mod run;
pub mod summary;

pub use candidate::Candidate;
pub use error::{CandidateError, ConfigError};
pub use run::{RunFailure, RunResult};
pub use summary::{summarize, Quantile, QuantileValue, Stats, Summary, DEFAULT_QUANTILES};
