//! Shared primitives for the perfcurve workspace.
//!
//! `perfcurve-core` provides the foundation the metric crates build on:
//!
//! - **Error types**: [`PerfCurveError`] and [`Result`] for structured error handling
//! - **Samples**: [`Sample`], [`ClassCounts`] and the input checks every metric runs

pub mod error;
pub mod sample;

pub use error::{PerfCurveError, Result};
pub use sample::{is_positive, validate_samples, zip_samples, ClassCounts, Sample};
