//! Empirical ROC curve construction.
//!
//! One curve point is produced per input sample: samples are sorted by
//! ascending score and each observed score is used as a threshold. Duplicate
//! scores are not merged, so the curve always has exactly as many points as
//! there are samples and is not guaranteed to be monotonic.

use perfcurve_core::{zip_samples, ClassCounts, PerfCurveError, Result};
use tracing::debug;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How the false-positive count at a threshold is formed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FalsePositiveRule {
    /// Positive-labeled samples scored below the threshold.
    ///
    /// Only positive samples are inspected. This reproduces the curves the
    /// dashboard has always drawn and is the default.
    #[default]
    PositivesBelowThreshold,
    /// Negative-labeled samples scored at or above the threshold (textbook ROC).
    NegativesAtOrAbove,
}

/// What to do when a rate has a zero denominator (one class is absent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZeroDivision {
    /// The affected rate is `0.0` at every threshold.
    #[default]
    Zero,
    /// Fail with [`PerfCurveError::DegenerateClassDistribution`].
    Error,
}

/// Configuration for [`build_roc_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RocOptions {
    /// False-positive counting rule.
    pub false_positive_rule: FalsePositiveRule,
    /// Zero-denominator policy.
    pub zero_division: ZeroDivision,
}

// ---------------------------------------------------------------------------
// ROC Curve
// ---------------------------------------------------------------------------

/// ROC curve as two parallel rate sequences, one entry per threshold.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocCurve {
    /// False positive rate at each threshold, in sweep order.
    pub false_positive_rates: Vec<f64>,
    /// True positive rate at each threshold, in sweep order.
    pub true_positive_rates: Vec<f64>,
}

impl RocCurve {
    /// Number of threshold points.
    pub fn len(&self) -> usize {
        self.true_positive_rates.len()
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.true_positive_rates.is_empty()
    }

    /// `(fpr, tpr)` pairs in sweep order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.false_positive_rates
            .iter()
            .copied()
            .zip(self.true_positive_rates.iter().copied())
    }
}

/// Build the ROC curve with default [`RocOptions`].
///
/// # Errors
///
/// Returns an error if the slices have different lengths or a score is NaN.
pub fn build_roc(labels: &[f64], scores: &[f64]) -> Result<RocCurve> {
    build_roc_with(labels, scores, &RocOptions::default())
}

/// Build the ROC curve from true labels and positive-class scores.
///
/// Samples are sorted by ascending score (stable) and every sorted score is
/// used as a threshold. At threshold `t` the true-positive count is the number
/// of positive samples with `score >= t`; the false-positive count follows
/// [`RocOptions::false_positive_rule`]. Rates are clamped to `[0, 1]`.
///
/// Runs in O(N log N): each class's scores are sorted once and every
/// threshold is resolved with a binary search.
///
/// # Errors
///
/// Returns an error if the slices have different lengths, a score is NaN, or
/// a class is absent under [`ZeroDivision::Error`].
pub fn build_roc_with(labels: &[f64], scores: &[f64], options: &RocOptions) -> Result<RocCurve> {
    let mut samples = zip_samples(labels, scores)?;
    let counts = ClassCounts::from_labels(labels);
    debug!(
        samples = samples.len(),
        positives = counts.positives,
        negatives = counts.negatives,
        rule = ?options.false_positive_rule,
        "building ROC curve"
    );

    if options.zero_division == ZeroDivision::Error
        && !samples.is_empty()
        && !counts.has_both_classes()
    {
        return Err(PerfCurveError::DegenerateClassDistribution {
            positives: counts.positives,
            negatives: counts.negatives,
        });
    }

    // Stable sort: equal scores keep input order.
    samples.sort_by(|a, b| a.score.total_cmp(&b.score));

    // Both lists inherit ascending order from `samples`.
    let (positive_scores, negative_scores): (Vec<f64>, Vec<f64>) = {
        let mut pos = Vec::with_capacity(counts.positives);
        let mut neg = Vec::with_capacity(counts.negatives);
        for s in &samples {
            if s.is_positive() {
                pos.push(s.score);
            } else {
                neg.push(s.score);
            }
        }
        (pos, neg)
    };

    let mut curve = RocCurve {
        false_positive_rates: Vec::with_capacity(samples.len()),
        true_positive_rates: Vec::with_capacity(samples.len()),
    };

    for sample in &samples {
        let threshold = sample.score;
        let tp = count_at_or_above(&positive_scores, threshold);
        let fp = match options.false_positive_rule {
            FalsePositiveRule::PositivesBelowThreshold => positive_scores.len() - tp,
            FalsePositiveRule::NegativesAtOrAbove => {
                count_at_or_above(&negative_scores, threshold)
            }
        };
        curve.true_positive_rates.push(rate(tp, counts.positives));
        curve.false_positive_rates.push(rate(fp, counts.negatives));
    }

    Ok(curve)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Number of entries in ascending `sorted` that are `>= threshold`.
fn count_at_or_above(sorted: &[f64], threshold: f64) -> usize {
    sorted.len() - sorted.partition_point(|&s| s < threshold)
}

/// `count / total`, `0.0` when `total` is zero, never above `1.0`.
fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64).min(1.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
