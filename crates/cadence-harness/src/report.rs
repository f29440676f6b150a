//! The outcome of a benchmark run.

use std::cmp::Ordering;

use cadence_core::{RunFailure, RunResult, Summary};
use indexmap::IndexMap;

/// Row order for presenting a [`Report`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportOrder {
    /// First-appearance order of the candidate labels.
    #[default]
    Input,
    /// Fastest mean first. Candidates without samples sort last, in
    /// input order.
    MeanAscending,
}

/// Per-label summaries plus the raw runs they were computed from.
///
/// Labels appear in the order their first candidate was supplied.
/// Candidates sharing a label are merged into one entry.
#[derive(Clone, Debug)]
pub struct Report {
    pub(crate) summaries: IndexMap<String, Summary>,
    pub(crate) runs: IndexMap<String, Vec<RunResult>>,
    pub(crate) failures: Vec<RunFailure>,
    pub(crate) repetitions: u32,
}

impl Report {
    /// Summary for `label`, if any candidate carried it.
    pub fn get(&self, label: &str) -> Option<&Summary> {
        self.summaries.get(label)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    /// `true` if the report has no entries. A report returned by the
    /// harness always has at least one.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Measured repetitions requested per candidate.
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Summaries in input order.
    pub fn summaries(&self) -> impl Iterator<Item = &Summary> {
        self.summaries.values()
    }

    /// Summaries in the requested order.
    pub fn ordered(&self, order: ReportOrder) -> Vec<&Summary> {
        let mut rows: Vec<&Summary> = self.summaries.values().collect();
        if order == ReportOrder::MeanAscending {
            // Stable sort keeps input order among ties and empties.
            rows.sort_by(|a, b| match (a.mean(), b.mean()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        rows
    }

    /// Successful runs recorded under `label`, in execution order.
    pub fn runs(&self, label: &str) -> &[RunResult] {
        self.runs.get(label).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every failed measured invocation, in execution order.
    pub fn failures(&self) -> &[RunFailure] {
        &self.failures
    }

    /// Labels whose every measured invocation failed.
    pub fn failed_candidates(&self) -> impl Iterator<Item = &str> {
        self.summaries
            .values()
            .filter(|s| s.all_failed())
            .map(|s| s.label.as_str())
    }

    /// Each label's mean relative to the fastest mean in the report.
    ///
    /// The fastest candidate is `1.0`. Labels without samples map to
    /// `None`. If the fastest mean is zero, ratios are undefined and
    /// every entry is `None`.
    pub fn relative(&self) -> IndexMap<&str, Option<f64>> {
        let fastest = self.summaries.values().filter_map(Summary::mean).min();
        self.summaries
            .values()
            .map(|s| {
                let ratio = match (s.mean(), fastest) {
                    (Some(m), Some(f)) if !f.is_zero() => Some(m.as_secs_f64() / f.as_secs_f64()),
                    _ => None,
                };
                (s.label.as_str(), ratio)
            })
            .collect()
    }

    /// Consume the report, keeping only the label to summary mapping.
    pub fn into_summaries(self) -> IndexMap<String, Summary> {
        self.summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::{CandidateError, DEFAULT_QUANTILES};
    use std::time::Duration;

    fn summary(label: &str, micros: &[u64]) -> Summary {
        let runs: Vec<RunResult> = micros
            .iter()
            .enumerate()
            .map(|(i, &us)| RunResult::new(label, Duration::from_micros(us), i as u32))
            .collect();
        Summary::from_runs(label, &runs, &DEFAULT_QUANTILES)
    }

    fn report(entries: Vec<Summary>) -> Report {
        Report {
            summaries: entries.into_iter().map(|s| (s.label.clone(), s)).collect(),
            runs: IndexMap::new(),
            failures: Vec::new(),
            repetitions: 1,
        }
    }

    #[test]
    fn mean_ascending_puts_empty_last() {
        let r = report(vec![
            summary("slow", &[30]),
            Summary::from_runs("broken", &[], &DEFAULT_QUANTILES).with_failures(1),
            summary("fast", &[10]),
            summary("mid", &[20]),
        ]);
        let labels: Vec<&str> = r
            .ordered(ReportOrder::MeanAscending)
            .into_iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, ["fast", "mid", "slow", "broken"]);

        let input: Vec<&str> = r
            .ordered(ReportOrder::Input)
            .into_iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(input, ["slow", "broken", "fast", "mid"]);
    }

    #[test]
    fn relative_to_fastest() {
        let r = report(vec![
            summary("a", &[40]),
            summary("b", &[10]),
            Summary::from_runs("c", &[], &DEFAULT_QUANTILES).with_failures(2),
        ]);
        let rel = r.relative();
        assert_eq!(rel["b"], Some(1.0));
        assert!((rel["a"].unwrap() - 4.0).abs() < 1e-9);
        assert_eq!(rel["c"], None);
        assert_eq!(r.failed_candidates().collect::<Vec<_>>(), ["c"]);
    }

    #[test]
    fn relative_with_zero_fastest_is_undefined() {
        let r = report(vec![summary("zero", &[0]), summary("a", &[5])]);
        assert!(r.relative().values().all(Option::is_none));
    }

    #[test]
    fn unknown_label_has_no_runs() {
        let mut r = report(vec![summary("a", &[1])]);
        r.failures.push(RunFailure {
            label: "a".into(),
            index: 0,
            error: CandidateError::failed("x"),
        });
        assert!(r.runs("missing").is_empty());
        assert_eq!(r.failures().len(), 1);
        assert!(r.get("missing").is_none());
    }
}
