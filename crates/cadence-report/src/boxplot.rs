//! ASCII box plots on a shared time axis.
//!
//! ```text
//! fast  |--[==M=]---|
//! slow                 |---[===M====]-----|
//!       1.00 µs                      9.00 µs
//! ```
//!
//! Whiskers span min..max, the box spans p25..p75, `M` marks the median.
//! When p25 or p75 was not among the reported quantiles the box collapses
//! onto the median.

use std::time::Duration;

use cadence_core::{Quantile, Stats};
use cadence_harness::{Report, ReportOrder};

use crate::units::format_duration;

/// Smallest plot width accepted; narrower requests are widened.
const MIN_WIDTH: usize = 10;

/// Render one box plot line per label, scaled to `width` columns.
pub fn render_boxplot(report: &Report, order: ReportOrder, width: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let rows = report.ordered(order);
    let label_width = rows.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);

    let lo = rows
        .iter()
        .filter_map(|s| s.stats.as_ref().map(|st| st.min))
        .min();
    let hi = rows
        .iter()
        .filter_map(|s| s.stats.as_ref().map(|st| st.max))
        .max();

    let mut out = String::new();
    for summary in &rows {
        out.push_str(&format!("{:<label_width$}  ", summary.label));
        match (&summary.stats, lo, hi) {
            (Some(st), Some(lo), Some(hi)) => {
                let line: String = plot_row(st, lo, hi, width).into_iter().collect();
                out.push_str(line.trim_end());
            }
            _ => out.push_str("(no successful samples)"),
        }
        out.push('\n');
    }

    if let (Some(lo), Some(hi)) = (lo, hi) {
        let left = format_duration(lo);
        let right = format_duration(hi);
        let gap = width.saturating_sub(left.chars().count() + right.chars().count()).max(1);
        out.push_str(&format!(
            "{:<label_width$}  {left}{}{right}\n",
            "",
            " ".repeat(gap)
        ));
    }
    out
}

fn plot_row(st: &Stats, lo: Duration, hi: Duration, width: usize) -> Vec<char> {
    let span = hi.saturating_sub(lo).as_secs_f64();
    let pos = |d: Duration| -> usize {
        if span == 0.0 {
            return 0;
        }
        let frac = d.saturating_sub(lo).as_secs_f64() / span;
        ((frac * (width - 1) as f64).round() as usize).min(width - 1)
    };

    let q1 = st.quantile(Quantile::P25).unwrap_or(st.median);
    let q3 = st.quantile(Quantile::P75).unwrap_or(st.median);
    let (min, q1, med, q3, max) = (pos(st.min), pos(q1), pos(st.median), pos(q3), pos(st.max));

    let mut cells = vec![' '; width];
    cells[min..=max].fill('-');
    cells[q1..=q3].fill('=');
    cells[q1] = '[';
    cells[q3] = ']';
    cells[min] = '|';
    cells[max] = '|';
    cells[med] = 'M';
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::Candidate;
    use cadence_harness::{BenchmarkHarness, HarnessConfig};
    use cadence_test_utils::{always_fails, StepClock};

    #[test]
    fn markers_in_order() {
        let report = BenchmarkHarness::with_clock(
            HarnessConfig::default().with_repetitions(3),
            StepClock::new(Duration::from_micros(2)),
        )
        .run(vec![Candidate::new("flat", || ()), always_fails("dead")])
        .unwrap();
        let out = render_boxplot(&report, ReportOrder::Input, 20);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        // Zero-width span collapses everything onto column 0.
        assert_eq!(lines[0], "flat  M");
        assert_eq!(lines[1], "dead  (no successful samples)");
        assert!(lines[2].contains("2.00 µs"));
    }

    #[test]
    fn row_spans_whiskers_box_and_median() {
        let st = Stats {
            mean: Duration::from_micros(5),
            median: Duration::from_micros(5),
            min: Duration::from_micros(0),
            max: Duration::from_micros(10),
            std_dev: None,
            quantiles: [
                cadence_core::QuantileValue {
                    quantile: Quantile::P25,
                    value: Duration::from_micros(3),
                },
                cadence_core::QuantileValue {
                    quantile: Quantile::P75,
                    value: Duration::from_micros(7),
                },
            ]
            .into_iter()
            .collect(),
        };
        let row: String = plot_row(&st, Duration::ZERO, Duration::from_micros(10), 11)
            .into_iter()
            .collect();
        assert_eq!(row, "|--[=M=]--|");
    }

    #[test]
    fn empty_report_axis_omitted() {
        let report = BenchmarkHarness::with_clock(
            HarnessConfig::default().with_repetitions(2),
            StepClock::new(Duration::from_micros(1)),
        )
        .run(vec![always_fails("only")])
        .unwrap();
        let out = render_boxplot(&report, ReportOrder::Input, 5);
        assert_eq!(out, "only  (no successful samples)\n");
    }
}
