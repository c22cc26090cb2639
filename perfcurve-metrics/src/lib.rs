//! Binary classifier assessment metrics for model-performance charts.
//!
//! - **ROC curve**: [`build_roc`] thresholds at every observed score
//! - **AUC**: [`compute_auc`] integrates the ROC curve in a single sorted sweep
//! - **Chart series**: [`auc_chart_series`] turns a scored dataset into the
//!   AUC / Ideal / Random line series drawn by a charting layer
//!
//! Every function is pure: inputs are borrowed slices, outputs are owned
//! values, and nothing is cached between calls.

pub mod auc;
pub mod chart;
pub mod integrate;
pub mod roc;

pub use auc::{compute_auc, compute_auc_with, is_eligible_sample, AucOptions, SampleFilter};
pub use chart::{
    auc_chart_series, reference_series, ChartConfig, ModelOutputs, Point, ScoredDataset, Series,
    SeriesType,
};
pub use integrate::trapz;
pub use roc::{build_roc, build_roc_with, FalsePositiveRule, RocCurve, RocOptions, ZeroDivision};
