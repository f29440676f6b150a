//! Walk through the demonstration profiles and print comparison tables.
//!
//! Demonstrates:
//!   1. One-shot timing of a single call with `time`
//!   2. Comparing equivalent implementations with the harness
//!   3. Warm-up as a separately reported phase
//!   4. A fallible candidate that never produces a sample
//!   5. Table and box-plot rendering
//!
//! Run with:
//!   cargo run -p cadence-bench --example narrative
//!
//! Set `RUST_LOG=debug` to see per-candidate harness events.

use std::error::Error;

use cadence_bench::{
    allocation_profile, checked_mean_profile, fib_naive, fibonacci_profile, random_values,
    summation_profile,
};
use cadence_harness::{time, BenchmarkHarness, HarnessConfig, ReportOrder};
use cadence_report::{format_duration, render_boxplot, render_table, TableOptions};
use tracing::info;

const SEED: u64 = 42;
const REPETITIONS: u64 = 50;
const PLOT_WIDTH: usize = 48;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== Cadence Narrative ===\n");

    // --- 1. Time one call ---
    let (value, elapsed) = time(|| fib_naive(25));
    println!("fib_naive(25) = {value} in {}\n", format_duration(elapsed));

    let by_mean = TableOptions {
        order: ReportOrder::MeanAscending,
        ..TableOptions::default()
    };

    // --- 2. Loop vs iterator ---
    let data = random_values(100_000, SEED);
    let harness = BenchmarkHarness::new(HarnessConfig::default().with_repetitions(REPETITIONS));
    info!(values = data.len(), "summation profile");
    let report = harness.run(summation_profile(&data))?;
    println!("Summation over {} values:", data.len());
    print!("{}", render_table(&report, by_mean));
    println!();

    // --- 3. Growing vs preallocating, with warm-up ---
    let warm = BenchmarkHarness::new(
        HarnessConfig::default()
            .with_repetitions(REPETITIONS)
            .with_warmup(5),
    );
    info!("allocation profile");
    let report = warm.run(allocation_profile(100_000))?;
    println!("Building a 100K-element vector (5 warm-up runs each):");
    print!("{}", render_table(&report, by_mean));
    print!("{}", render_boxplot(&report, ReportOrder::MeanAscending, PLOT_WIDTH));
    println!();

    // --- 4. Recursion strategies ---
    info!("fibonacci profile");
    let report = harness.run(fibonacci_profile(20))?;
    println!("fib(20):");
    print!("{}", render_table(&report, by_mean));
    print!("{}", render_boxplot(&report, ReportOrder::MeanAscending, PLOT_WIDTH));
    println!();

    // --- 5. Failures are reported, not hidden ---
    info!("checked mean profile");
    let report = harness.run(checked_mean_profile(&data))?;
    println!("Checked mean (one input is empty):");
    print!("{}", render_table(&report, TableOptions::default()));
    for label in report.failed_candidates() {
        println!("  note: '{label}' produced no successful samples");
    }

    Ok(())
}
