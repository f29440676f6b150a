//! Text rendering for Cadence reports.
//!
//! Presentation only: everything here reads a finished
//! [`Report`](cadence_harness::Report) and produces a `String`.
//!
//! - [`render_table`]: aligned summary table
//! - [`render_boxplot`]: one ASCII box plot per label on a shared scale
//! - [`format_duration`]: human-readable durations (ns, µs, ms, s)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boxplot;
pub mod table;
pub mod units;

pub use boxplot::render_boxplot;
pub use table::{render_table, TableOptions};
pub use units::format_duration;

/// Marker printed where a statistic is absent.
pub const NO_VALUE: &str = "-";
