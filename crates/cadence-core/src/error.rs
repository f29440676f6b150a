//! Error types for the Cadence harness.
//!
//! Only [`ConfigError`] ever propagates out of a benchmark run. A
//! [`CandidateError`] describes one failed invocation; the harness
//! absorbs it, counts it, and keeps measuring.

use std::any::Any;
use std::error::Error;
use std::fmt;

/// Errors detected while validating a benchmark run before execution.
///
/// Returned synchronously from the harness; no candidate has been
/// invoked when one of these is produced.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The candidate list was empty.
    NoCandidates,
    /// The repetition count was zero.
    ZeroRepetitions,
    /// The repetition count does not fit the per-run sequence index.
    TooManyRepetitions {
        /// The requested repetition count.
        requested: u64,
    },
    /// A requested quantile was NaN or outside `[0, 1]`.
    InvalidQuantile {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "at least one candidate is required"),
            Self::ZeroRepetitions => write!(f, "repetitions must be at least 1"),
            Self::TooManyRepetitions { requested } => {
                write!(f, "repetitions {requested} exceeds u32::MAX")
            }
            Self::InvalidQuantile { value } => {
                write!(f, "quantile must be within [0, 1], got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// A single failed invocation of a candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CandidateError {
    /// The candidate returned an error.
    Failed {
        /// Rendered error message.
        reason: String,
    },
    /// The candidate panicked and the panic was caught.
    Panicked {
        /// Panic message, if the payload was a string.
        message: String,
    },
}

impl CandidateError {
    /// Build a [`CandidateError::Failed`] from any displayable error.
    pub fn failed(reason: impl fmt::Display) -> Self {
        Self::Failed {
            reason: reason.to_string(),
        }
    }

    /// Build a [`CandidateError::Panicked`] from a caught panic payload.
    ///
    /// `panic!` payloads are `&'static str` or `String`; anything else
    /// is reported with a placeholder message.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::Panicked { message }
    }
}

impl fmt::Display for CandidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed { reason } => write!(f, "candidate failed: {reason}"),
            Self::Panicked { message } => write!(f, "candidate panicked: {message}"),
        }
    }
}

impl Error for CandidateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::NoCandidates.to_string(),
            "at least one candidate is required"
        );
        assert_eq!(
            ConfigError::ZeroRepetitions.to_string(),
            "repetitions must be at least 1"
        );
        assert_eq!(
            ConfigError::InvalidQuantile { value: 1.5 }.to_string(),
            "quantile must be within [0, 1], got 1.5"
        );
    }

    #[test]
    fn panic_payload_str() {
        let err = CandidateError::from_panic(Box::new("boom"));
        assert_eq!(
            err,
            CandidateError::Panicked {
                message: "boom".into()
            }
        );
    }

    #[test]
    fn panic_payload_string() {
        let err = CandidateError::from_panic(Box::new(format!("index {}", 3)));
        assert_eq!(err.to_string(), "candidate panicked: index 3");
    }

    #[test]
    fn panic_payload_other() {
        let err = CandidateError::from_panic(Box::new(42u8));
        assert_eq!(
            err,
            CandidateError::Panicked {
                message: "non-string panic payload".into()
            }
        );
    }

    #[test]
    fn failed_from_display() {
        let err = CandidateError::failed(std::fmt::Error);
        assert!(matches!(err, CandidateError::Failed { .. }));
        assert!(err.to_string().starts_with("candidate failed:"));
    }
}
