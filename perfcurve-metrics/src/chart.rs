//! Line series for the model-overview AUC chart.
//!
//! Turns a scored dataset into the computed ROC series plus the two fixed
//! reference lines (Ideal and Random) a charting layer draws next to it.

use perfcurve_core::{PerfCurveError, Result};
use tracing::warn;

use crate::roc::{build_roc_with, RocOptions};

/// Name of the computed ROC series.
pub const AUC_SERIES: &str = "AUC";
/// Name of the ideal-classifier reference series.
pub const IDEAL_SERIES: &str = "Ideal";
/// Name of the random-classifier reference series.
pub const RANDOM_SERIES: &str = "Random";

// ---------------------------------------------------------------------------
// Dataset access
// ---------------------------------------------------------------------------

/// A dataset that may carry per-sample class probabilities.
pub trait ScoredDataset {
    /// Per-sample class-probability vectors, if the model produced any.
    fn probability_y(&self) -> Option<&[Vec<f64>]>;

    /// Per-sample true labels.
    fn true_y(&self) -> &[f64];
}

/// Owned model outputs for one cohort.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelOutputs {
    /// Class-probability vector per sample.
    #[cfg_attr(feature = "serde", serde(default))]
    pub probability_y: Option<Vec<Vec<f64>>>,
    /// True label per sample.
    #[cfg_attr(feature = "serde", serde(default))]
    pub true_y: Vec<f64>,
}

impl ScoredDataset for ModelOutputs {
    fn probability_y(&self) -> Option<&[Vec<f64>]> {
        self.probability_y.as_deref()
    }

    fn true_y(&self) -> &[f64] {
        &self.true_y
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// A plotted `(x, y)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// False-positive rate.
    pub x: f64,
    /// True-positive rate.
    pub y: f64,
}

impl Point {
    /// A point at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeriesType {
    /// Straight segments between consecutive points.
    #[default]
    Line,
}

/// A named series of points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    /// Legend name: `AUC`, `Ideal` or `Random`.
    pub name: String,
    /// Points in drawing order.
    pub data: Vec<Point>,
    /// Serialized as `type`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub series_type: SeriesType,
}

impl Series {
    /// A line series.
    pub fn line(name: impl Into<String>, data: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            data,
            series_type: SeriesType::Line,
        }
    }
}

/// Configuration for [`auc_chart_series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartConfig {
    /// Index of the positive class inside each probability vector.
    pub positive_class: usize,
    /// Options passed to the curve builder.
    pub roc: RocOptions,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            positive_class: 1,
            roc: RocOptions::default(),
        }
    }
}

/// The fixed Ideal and Random reference series.
///
/// Ideal runs `(0,0) → (0,1) → (1,1)`; Random runs `(0,0) → (1,1)`.
pub fn reference_series() -> Vec<Series> {
    vec![
        Series::line(
            IDEAL_SERIES,
            vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 1.0)],
        ),
        Series::line(
            RANDOM_SERIES,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        ),
    ]
}

/// Build the series set for the AUC chart.
///
/// Without probabilities only [`reference_series`] is returned. Otherwise the
/// positive-class component of every probability vector is run through the
/// curve builder, and the resulting `(fpr, tpr)` points, sorted by ascending
/// `x`, come first as the `AUC` series, followed by the reference series.
///
/// # Errors
///
/// Returns an error if the probability and label counts differ, a probability
/// vector has no positive-class component, or the curve builder fails.
pub fn auc_chart_series<D>(dataset: &D, config: &ChartConfig) -> Result<Vec<Series>>
where
    D: ScoredDataset + ?Sized,
{
    let Some(probabilities) = dataset.probability_y() else {
        warn!("dataset has no class probabilities, drawing reference curves only");
        return Ok(reference_series());
    };

    let scores = positive_class_scores(probabilities, config.positive_class)?;
    let roc = build_roc_with(dataset.true_y(), &scores, &config.roc)?;

    let mut data: Vec<Point> = roc.points().map(|(x, y)| Point::new(x, y)).collect();
    data.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut series = Vec::with_capacity(3);
    series.push(Series::line(AUC_SERIES, data));
    series.extend(reference_series());
    Ok(series)
}

/// Pick component `class` out of every probability vector.
fn positive_class_scores(probabilities: &[Vec<f64>], class: usize) -> Result<Vec<f64>> {
    probabilities
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.get(class).copied().ok_or_else(|| {
                PerfCurveError::InvalidInput(format!(
                    "probability vector {i} has {} classes, positive class index is {class}",
                    row.len()
                ))
            })
        })
        .collect()
}
