//! Aligned summary table.
//!
//! Columns: label, count, failures, mean, median, min, max, then one
//! column per reported quantile, then (optionally) the mean relative to
//! the fastest label. A label without successful samples shows
//! `no samples` in the mean column and [`NO_VALUE`] elsewhere, so it can
//! never be mistaken for a fast candidate.

use cadence_core::{Quantile, Summary};
use cadence_harness::{Report, ReportOrder};

use crate::units::format_duration;
use crate::NO_VALUE;

/// Rendering options for [`render_table`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Row order. Default: input order.
    pub order: ReportOrder,
    /// Append a `relative` column. Default: `true`.
    pub relative: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            order: ReportOrder::Input,
            relative: true,
        }
    }
}

/// Render `report` as a whitespace-aligned table, one line per label.
pub fn render_table(report: &Report, options: TableOptions) -> String {
    let quantiles: Vec<Quantile> = report
        .summaries()
        .find_map(|s| s.stats.as_ref())
        .map(|st| st.quantiles.iter().map(|qv| qv.quantile).collect())
        .unwrap_or_default();
    let relative = report.relative();

    let mut header: Vec<String> = ["label", "count", "fail", "mean", "median", "min", "max"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    header.extend(quantiles.iter().map(Quantile::to_string));
    if options.relative {
        header.push("relative".to_string());
    }

    let mut rows = vec![header];
    for summary in report.ordered(options.order) {
        let mut row = stat_cells(summary, &quantiles);
        if options.relative {
            let cell = match relative.get(summary.label.as_str()).copied().flatten() {
                Some(r) => format!("{r:.2}x"),
                None => NO_VALUE.to_string(),
            };
            row.push(cell);
        }
        rows.push(row);
    }

    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|r| r[c].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        let mut line = String::new();
        for (c, cell) in row.iter().enumerate() {
            if c == 0 {
                line.push_str(&format!("{cell:<w$}", w = widths[c]));
            } else {
                line.push_str(&format!("  {cell:>w$}", w = widths[c]));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
        if i == 0 {
            let total = widths.iter().sum::<usize>() + 2 * (columns - 1);
            out.push_str(&"-".repeat(total));
            out.push('\n');
        }
    }
    out
}

fn stat_cells(summary: &Summary, quantiles: &[Quantile]) -> Vec<String> {
    let mut row = vec![
        summary.label.clone(),
        summary.count.to_string(),
        summary.failures.to_string(),
    ];
    match &summary.stats {
        Some(st) => {
            row.extend(
                [st.mean, st.median, st.min, st.max]
                    .into_iter()
                    .map(format_duration),
            );
            row.extend(quantiles.iter().map(|&q| {
                st.quantile(q)
                    .map(format_duration)
                    .unwrap_or_else(|| NO_VALUE.to_string())
            }));
        }
        None => {
            row.push("no samples".to_string());
            row.extend((0..3 + quantiles.len()).map(|_| NO_VALUE.to_string()));
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::Candidate;
    use cadence_harness::{BenchmarkHarness, HarnessConfig};
    use cadence_test_utils::{always_fails, StepClock};
    use std::time::Duration;

    fn report() -> Report {
        BenchmarkHarness::with_clock(
            HarnessConfig::default().with_repetitions(4),
            StepClock::new(Duration::from_micros(5)),
        )
        .run(vec![
            Candidate::new("ok", || ()),
            always_fails("broken"),
        ])
        .unwrap()
    }

    #[test]
    fn header_and_rule() {
        let out = render_table(&report(), TableOptions::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("label"));
        assert!(lines[0].contains("p25"));
        assert!(lines[0].ends_with("relative"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn columns_are_aligned() {
        let out = render_table(&report(), TableOptions::default());
        let lines: Vec<&str> = out.lines().collect();
        let rule = lines[1].chars().count();
        // Right-aligned "relative" closes the header at the rule's width.
        assert_eq!(lines[0].chars().count(), rule);
        assert_eq!(lines[2].chars().count(), rule);
        assert!(lines[2].starts_with("ok      "));
        assert!(lines[3].starts_with("broken  "));
        let count_end = lines[0].find("count").unwrap() + "count".len();
        assert!(lines[2][..count_end].ends_with("    4"));
        assert!(lines[3][..count_end].ends_with("    0"));
    }

    #[test]
    fn failed_candidate_is_not_zero() {
        let out = render_table(&report(), TableOptions::default());
        let broken = out.lines().find(|l| l.starts_with("broken")).unwrap();
        assert!(broken.contains("no samples"));
        assert!(!broken.contains("0 ns"));
        let ok = out.lines().find(|l| l.starts_with("ok")).unwrap();
        assert!(ok.contains("5.00 µs"));
        assert!(ok.contains("1.00x"));
    }

    #[test]
    fn relative_column_optional() {
        let opts = TableOptions {
            relative: false,
            ..TableOptions::default()
        };
        let out = render_table(&report(), opts);
        assert!(!out.contains("relative"));
    }
}
