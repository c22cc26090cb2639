//! ROC, AUC and chart-series wrappers with JSON input/output.
//!
//! Label and score arguments are JSON arrays of numbers. Options and datasets
//! are JSON objects whose missing fields take their defaults.

use perfcurve_core::{PerfCurveError, Result};
use perfcurve_metrics::{
    auc_chart_series, build_roc_with, compute_auc_with, AucOptions, ChartConfig, ModelOutputs,
    RocCurve, RocOptions, SampleFilter, Series,
};

use crate::error::{parse_json, wasm_result};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

fn parse_pair(labels_json: &str, scores_json: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let labels = parse_json::<Vec<f64>>("labels", labels_json)?;
    let scores = parse_json::<Vec<f64>>("scores", scores_json)?;
    Ok((labels, scores))
}

/// Parse a sample filter name.
fn parse_filter(s: &str) -> Result<SampleFilter> {
    match s {
        "all" => Ok(SampleFilter::All),
        "nonzero" => Ok(SampleFilter::NonZero),
        _ => Err(PerfCurveError::InvalidInput(format!(
            "unknown sample filter: {s} (expected all or nonzero)"
        ))),
    }
}

fn roc_impl(labels_json: &str, scores_json: &str, options: &RocOptions) -> Result<RocCurve> {
    let (labels, scores) = parse_pair(labels_json, scores_json)?;
    build_roc_with(&labels, &scores, options)
}

fn auc_impl(labels_json: &str, scores_json: &str, options: &AucOptions) -> Result<f64> {
    let (labels, scores) = parse_pair(labels_json, scores_json)?;
    compute_auc_with(&labels, &scores, options)
}

/// ROC curve with default options.
///
/// Returns JSON `{"false_positive_rates": [...], "true_positive_rates": [...]}`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn roc_curve(labels_json: &str, scores_json: &str) -> String {
    wasm_result(roc_impl(labels_json, scores_json, &RocOptions::default()))
}

/// ROC curve with options given as JSON, e.g.
/// `{"false_positive_rule": "negatives_at_or_above", "zero_division": "error"}`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn roc_curve_with(labels_json: &str, scores_json: &str, options_json: &str) -> String {
    wasm_result(
        parse_json::<RocOptions>("options", options_json)
            .and_then(|options| roc_impl(labels_json, scores_json, &options)),
    )
}

/// Area under the ROC curve with default options.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn auc(labels_json: &str, scores_json: &str) -> String {
    wasm_result(auc_impl(labels_json, scores_json, &AucOptions::default()))
}

/// Area under the ROC curve with an explicit sample filter (`"all"` or `"nonzero"`).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn auc_with(labels_json: &str, scores_json: &str, filter: &str) -> String {
    wasm_result(
        parse_filter(filter)
            .and_then(|filter| auc_impl(labels_json, scores_json, &AucOptions { filter })),
    )
}

/// AUC chart series for a dataset `{"probability_y": [[...], ...], "true_y": [...]}`.
///
/// Returns a JSON array of `{"name", "data": [{"x", "y"}], "type"}` series.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn auc_chart_data(dataset_json: &str) -> String {
    wasm_result(chart_impl(dataset_json, &ChartConfig::default()))
}

/// AUC chart series with a JSON [`ChartConfig`], e.g. `{"positive_class": 0}`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn auc_chart_data_with(dataset_json: &str, config_json: &str) -> String {
    wasm_result(
        parse_json::<ChartConfig>("config", config_json)
            .and_then(|config| chart_impl(dataset_json, &config)),
    )
}

fn chart_impl(dataset_json: &str, config: &ChartConfig) -> Result<Vec<Series>> {
    let dataset = parse_json::<ModelOutputs>("dataset", dataset_json)?;
    auc_chart_series(&dataset, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn roc_curve_shape() {
        let v = parse(&roc_curve("[0,0,1,1]", "[0.1,0.4,0.35,0.8]"));
        let tpr = v["ok"]["true_positive_rates"].as_array().unwrap();
        let fpr = v["ok"]["false_positive_rates"].as_array().unwrap();
        assert_eq!(tpr.len(), 4);
        assert_eq!(fpr.len(), 4);
        assert_eq!(tpr[0], 1.0);
    }

    #[test]
    fn roc_curve_with_error_policy() {
        let v = parse(&roc_curve_with(
            "[1,1,1]",
            "[0.1,0.5,0.9]",
            r#"{"zero_division": "error"}"#,
        ));
        assert!(v["error"].as_str().unwrap().contains("degenerate"));
    }

    #[test]
    fn roc_curve_with_empty_options() {
        let v = parse(&roc_curve_with("[0,1]", "[0.2,0.8]", "{}"));
        assert!(v["ok"].is_object());
    }

    #[test]
    fn auc_canonical() {
        let v = parse(&auc("[0,0,1,1]", "[0.1,0.4,0.35,0.8]"));
        assert!((v["ok"].as_f64().unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn auc_with_nonzero_filter() {
        let v = parse(&auc_with("[0,0,1,1]", "[0.1,0.4,0.35,0.8]", "nonzero"));
        assert_eq!(v["ok"].as_f64().unwrap(), 0.0);
    }

    #[test]
    fn auc_with_unknown_filter() {
        let v = parse(&auc_with("[0,1]", "[0.1,0.9]", "truthy"));
        assert!(v["error"].as_str().unwrap().contains("unknown sample filter"));
    }

    #[test]
    fn auc_length_mismatch() {
        let v = parse(&auc("[0,1,1]", "[0.1,0.9]"));
        assert!(v["error"].as_str().unwrap().contains("length"));
    }

    #[test]
    fn auc_bad_json() {
        let v = parse(&auc("[0,1", "[0.1,0.9]"));
        assert!(v["error"].as_str().unwrap().contains("invalid labels JSON"));
    }

    #[test]
    fn chart_without_probabilities() {
        let v = parse(&auc_chart_data(r#"{"true_y": [0, 1]}"#));
        let series = v["ok"].as_array().unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0]["name"], "Ideal");
        assert_eq!(series[1]["name"], "Random");
        assert_eq!(series[0]["data"][1]["y"], 1.0);
    }

    #[test]
    fn chart_with_probabilities() {
        let v = parse(&auc_chart_data(
            r#"{"probability_y": [[0.9,0.1],[0.6,0.4],[0.65,0.35],[0.2,0.8]], "true_y": [0,0,1,1]}"#,
        ));
        let series = v["ok"].as_array().unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0]["name"], "AUC");
        assert_eq!(series[0]["type"], "line");
        assert_eq!(series[0]["data"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn chart_with_config() {
        let v = parse(&auc_chart_data_with(
            r#"{"probability_y": [[0.8,0.2],[0.3,0.7]], "true_y": [1,0]}"#,
            r#"{"positive_class": 0}"#,
        ));
        assert_eq!(v["ok"][0]["name"], "AUC");
    }
}
