//! The [`Candidate`] type: a labelled, zero-argument unit of work.

use std::fmt;
use std::hint::black_box;

use crate::error::CandidateError;

type Routine<'a> = Box<dyn FnMut() -> Result<(), CandidateError> + 'a>;

/// A named computation to be timed.
///
/// The label is for display only. Several candidates may share a label;
/// the harness merges their results under that label.
///
/// The routine may borrow from its environment (`'a`), so candidates can
/// close over fixtures owned by the caller. Return values are passed
/// through [`black_box`] so the optimizer cannot discard the work.
///
/// # Examples
///
/// ```
/// use cadence_core::Candidate;
///
/// let data: Vec<u64> = (0..1_000).collect();
/// let mut sum = Candidate::new("iter_sum", || data.iter().sum::<u64>());
/// assert_eq!(sum.label(), "iter_sum");
/// assert!(sum.invoke().is_ok());
/// ```
pub struct Candidate<'a> {
    label: String,
    routine: Routine<'a>,
}

impl<'a> Candidate<'a> {
    /// Wrap an infallible routine.
    pub fn new<T, F>(label: impl Into<String>, mut f: F) -> Self
    where
        F: FnMut() -> T + 'a,
    {
        Self {
            label: label.into(),
            routine: Box::new(move || {
                black_box(f());
                Ok(())
            }),
        }
    }

    /// Wrap a routine that reports failure through `Err`.
    ///
    /// The error is rendered with `Display` and recorded as
    /// [`CandidateError::Failed`].
    pub fn fallible<T, E, F>(label: impl Into<String>, mut f: F) -> Self
    where
        E: fmt::Display,
        F: FnMut() -> Result<T, E> + 'a,
    {
        Self {
            label: label.into(),
            routine: Box::new(move || match f() {
                Ok(v) => {
                    black_box(v);
                    Ok(())
                }
                Err(e) => Err(CandidateError::failed(e)),
            }),
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Invoke the routine once.
    ///
    /// Panics inside the routine are not caught here; the harness
    /// decides whether to catch them.
    pub fn invoke(&mut self) -> Result<(), CandidateError> {
        (self.routine)()
    }
}

impl fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn infallible_candidate_always_ok() {
        let calls = Cell::new(0u32);
        let mut c = Candidate::new("count", || calls.set(calls.get() + 1));
        for _ in 0..3 {
            assert!(c.invoke().is_ok());
        }
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn fallible_candidate_maps_error() {
        let mut c = Candidate::fallible("parse", || "x".parse::<u32>());
        match c.invoke() {
            Err(CandidateError::Failed { reason }) => assert!(!reason.is_empty()),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn fallible_candidate_ok_path() {
        let mut c = Candidate::fallible("parse", || "17".parse::<u32>());
        assert!(c.invoke().is_ok());
    }

    #[test]
    fn debug_shows_label() {
        let c = Candidate::new("noop", || ());
        let s = format!("{c:?}");
        assert!(s.contains("noop"));
    }
}
