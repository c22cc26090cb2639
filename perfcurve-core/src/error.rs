//! Structured error types for perfcurve.

use thiserror::Error;

/// Unified error type for all perfcurve operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PerfCurveError {
    /// Invalid input (mismatched lengths, unorderable scores, missing class data)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// One of the classes is empty, so a rate has a zero denominator
    #[error("degenerate class distribution: {positives} positive / {negatives} negative samples")]
    DegenerateClassDistribution {
        /// Number of positive-labeled samples.
        positives: usize,
        /// Number of non-positive-labeled samples.
        negatives: usize,
    },

    /// Payload could not be decoded at a serialization boundary
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias used throughout perfcurve.
pub type Result<T> = std::result::Result<T, PerfCurveError>;
