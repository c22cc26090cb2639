//! Labeled score samples and the input checks shared by every curve metric.
//!
//! Labels are plain `f64` values: anything strictly greater than zero is the
//! positive class, everything else (including `-1.0` and NaN) is negative.

use crate::{PerfCurveError, Result};

/// One prediction paired with its ground-truth label.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Ground-truth label; `> 0` denotes the positive class.
    pub label: f64,
    /// Predicted probability or ranking score.
    pub score: f64,
}

impl Sample {
    /// Create a sample from a label and a score.
    pub fn new(label: f64, score: f64) -> Self {
        Self { label, score }
    }

    /// Whether this sample belongs to the positive class.
    pub fn is_positive(&self) -> bool {
        is_positive(self.label)
    }
}

/// Positive-class predicate used by every metric.
#[inline]
pub fn is_positive(label: f64) -> bool {
    label > 0.0
}

/// Number of positive and negative samples in a label vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassCounts {
    /// Samples with `label > 0`.
    pub positives: usize,
    /// All remaining samples.
    pub negatives: usize,
}

impl ClassCounts {
    /// Count classes in `labels`.
    pub fn from_labels(labels: &[f64]) -> Self {
        let positives = labels.iter().filter(|&&l| is_positive(l)).count();
        Self {
            positives,
            negatives: labels.len() - positives,
        }
    }

    /// Total number of samples.
    pub fn total(&self) -> usize {
        self.positives + self.negatives
    }

    /// Whether both classes are represented.
    pub fn has_both_classes(&self) -> bool {
        self.positives > 0 && self.negatives > 0
    }
}

/// Check that `labels` and `scores` describe a valid sample set.
///
/// # Errors
///
/// Returns an error if the slices have different lengths or any score is NaN.
/// Empty input is valid.
pub fn validate_samples(labels: &[f64], scores: &[f64]) -> Result<()> {
    if labels.len() != scores.len() {
        return Err(PerfCurveError::InvalidInput(format!(
            "labels length {} != scores length {}",
            labels.len(),
            scores.len()
        )));
    }
    if let Some(i) = scores.iter().position(|s| s.is_nan()) {
        return Err(PerfCurveError::InvalidInput(format!(
            "score at index {i} is NaN"
        )));
    }
    Ok(())
}

/// Validate and zip labels and scores into samples, preserving input order.
///
/// # Errors
///
/// See [`validate_samples`].
pub fn zip_samples(labels: &[f64], scores: &[f64]) -> Result<Vec<Sample>> {
    validate_samples(labels, scores)?;
    Ok(labels
        .iter()
        .zip(scores)
        .map(|(&label, &score)| Sample::new(label, score))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_predicate() {
        assert!(is_positive(1.0));
        assert!(is_positive(0.5));
        assert!(!is_positive(0.0));
        assert!(!is_positive(-1.0));
        assert!(!is_positive(f64::NAN));
    }

    #[test]
    fn class_counts() {
        let counts = ClassCounts::from_labels(&[0.0, 1.0, 1.0, -1.0, 2.0]);
        assert_eq!(counts.positives, 3);
        assert_eq!(counts.negatives, 2);
        assert_eq!(counts.total(), 5);
        assert!(counts.has_both_classes());
    }

    #[test]
    fn single_class_not_balanced() {
        assert!(!ClassCounts::from_labels(&[1.0, 1.0]).has_both_classes());
        assert!(!ClassCounts::from_labels(&[]).has_both_classes());
    }

    #[test]
    fn zip_preserves_order() {
        let samples = zip_samples(&[0.0, 1.0], &[0.3, 0.7]).unwrap();
        assert_eq!(samples, vec![Sample::new(0.0, 0.3), Sample::new(1.0, 0.7)]);
        assert!(samples[1].is_positive());
    }

    #[test]
    fn empty_is_valid() {
        assert!(zip_samples(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn length_mismatch_error() {
        let err = validate_samples(&[0.0, 1.0], &[0.5]).unwrap_err();
        assert!(matches!(err, PerfCurveError::InvalidInput(_)));
    }

    #[test]
    fn nan_score_error() {
        let err = validate_samples(&[0.0, 1.0], &[0.5, f64::NAN]).unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn infinite_scores_allowed() {
        assert!(validate_samples(&[0.0, 1.0], &[f64::NEG_INFINITY, f64::INFINITY]).is_ok());
    }
}
