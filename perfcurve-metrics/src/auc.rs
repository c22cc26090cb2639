//! Area under the ROC curve by incremental trapezoidal integration.
//!
//! Samples are visited from the highest score to the lowest. Each run of equal
//! scores closes one trapezoid strip between the previous and current
//! (false positive, true positive) counts, so the full curve is never built.

use perfcurve_core::{validate_samples, Result, Sample};
use tracing::debug;

use crate::integrate::trapz;

/// Which samples take part in the AUC sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SampleFilter {
    /// Every sample participates.
    #[default]
    All,
    /// Drop samples whose score is `0.0` or whose label is `0.0` / NaN.
    ///
    /// Matches the dashboard's historical estimator. With `{0, 1}` labels
    /// every negative is dropped and the result is `0.0`; `{-1, 1}` labels
    /// are unaffected apart from zero scores.
    NonZero,
}

/// Configuration for [`compute_auc_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AucOptions {
    /// Sample eligibility policy.
    pub filter: SampleFilter,
}

/// Whether a `(score, label)` pair is admitted into the sweep under `filter`.
pub fn is_eligible_sample(score: f64, label: f64, filter: SampleFilter) -> bool {
    match filter {
        SampleFilter::All => true,
        SampleFilter::NonZero => score != 0.0 && label != 0.0 && !label.is_nan(),
    }
}

/// Running state of the sweep.
#[derive(Debug, Clone, Copy)]
struct AucSweep {
    true_positives: usize,
    false_positives: usize,
    prev_true_positives: usize,
    prev_false_positives: usize,
    prev_score: f64,
    area: f64,
}

impl AucSweep {
    fn new() -> Self {
        Self {
            true_positives: 0,
            false_positives: 0,
            prev_true_positives: 0,
            prev_false_positives: 0,
            prev_score: f64::NEG_INFINITY,
            area: 0.0,
        }
    }

    fn close_strip(&mut self) {
        self.area += trapz(
            self.false_positives as f64,
            self.prev_false_positives as f64,
            self.true_positives as f64,
            self.prev_true_positives as f64,
        );
    }

    fn step(mut self, sample: Sample) -> Self {
        if (sample.score - self.prev_score).abs() > f64::EPSILON {
            self.close_strip();
            self.prev_score = sample.score;
            self.prev_false_positives = self.false_positives;
            self.prev_true_positives = self.true_positives;
        }
        if sample.is_positive() {
            self.true_positives += 1;
        } else {
            self.false_positives += 1;
        }
        self
    }

    fn finish(mut self) -> f64 {
        self.close_strip();
        let pairs = self.true_positives as f64 * self.false_positives as f64;
        if pairs == 0.0 {
            0.0
        } else {
            // Guard against overshoot from accumulated rounding.
            (self.area / pairs).min(1.0)
        }
    }
}

/// Compute AUC with default [`AucOptions`].
///
/// # Errors
///
/// Returns an error if the slices have different lengths or a score is NaN.
pub fn compute_auc(labels: &[f64], scores: &[f64]) -> Result<f64> {
    compute_auc_with(labels, scores, &AucOptions::default())
}

/// Compute the area under the ROC curve of `scores` against `labels`.
///
/// Equivalent to the Mann-Whitney probability that a random positive scores
/// above a random negative, with ties counted as one half. Scores no further
/// apart than `f64::EPSILON` are treated as tied. Returns `0.0` for empty input or when
/// either class is absent after filtering; the result never exceeds `1.0`.
///
/// # Errors
///
/// Returns an error if the slices have different lengths or a score is NaN.
pub fn compute_auc_with(labels: &[f64], scores: &[f64], options: &AucOptions) -> Result<f64> {
    validate_samples(labels, scores)?;

    // Highest score first; the stable sort keeps ties in input order.
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let sweep = order
        .iter()
        .map(|&i| Sample::new(labels[i], scores[i]))
        .filter(|s| is_eligible_sample(s.score, s.label, options.filter))
        .fold(AucSweep::new(), AucSweep::step);

    debug!(
        positives = sweep.true_positives,
        negatives = sweep.false_positives,
        filter = ?options.filter,
        "AUC sweep complete"
    );
    Ok(sweep.finish())
}
