//! Result envelope shared by the ROC, AUC and chart-series entry points.
//!
//! A charting layer receives either `{"ok": <curve | auc | series>}` or
//! `{"error": "<message>"}`, where the message is the `Display` form of a
//! [`PerfCurveError`]. Malformed JSON arguments surface as
//! `PerfCurveError::Serialization` naming the offending argument.

use std::fmt::Display;

use perfcurve_core::PerfCurveError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Externally tagged, so `Ok(v)` encodes as `{"ok": v}`.
#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Envelope<'a, T: Serialize> {
    Ok(&'a T),
    Error(String),
}

/// Wrap a computed metric as `{"ok": val}`.
pub fn wasm_ok<T: Serialize>(val: &T) -> String {
    serde_json::to_string(&Envelope::Ok(val)).unwrap_or_else(|e| wasm_err(e))
}

/// Wrap a failure as `{"error": "msg"}`.
pub fn wasm_err(msg: impl Display) -> String {
    serde_json::to_string(&Envelope::<()>::Error(msg.to_string()))
        .unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.into())
}

/// Map a metric result into the envelope.
pub fn wasm_result<T: Serialize>(r: perfcurve_core::Result<T>) -> String {
    match r {
        Ok(val) => wasm_ok(&val),
        Err(e) => wasm_err(e),
    }
}

/// Decode a JSON argument, naming it in the error.
pub fn parse_json<T: DeserializeOwned>(what: &str, json: &str) -> perfcurve_core::Result<T> {
    serde_json::from_str(json)
        .map_err(|e| PerfCurveError::Serialization(format!("invalid {what} JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfcurve_metrics::RocCurve;

    fn decode(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn curve_is_wrapped_in_ok() {
        let curve = RocCurve {
            false_positive_rates: vec![0.0, 0.5],
            true_positive_rates: vec![1.0, 0.5],
        };
        let v = decode(&wasm_ok(&curve));
        assert_eq!(v["ok"]["false_positive_rates"], serde_json::json!([0.0, 0.5]));
        assert_eq!(v["ok"]["true_positive_rates"], serde_json::json!([1.0, 0.5]));
        assert!(v.get("error").is_none());
    }

    #[test]
    fn auc_value_is_wrapped_in_ok() {
        let v = decode(&wasm_result(Ok(0.75)));
        assert_eq!(v["ok"], 0.75);
    }

    #[test]
    fn degenerate_distribution_becomes_error_message() {
        let r: perfcurve_core::Result<RocCurve> =
            Err(PerfCurveError::DegenerateClassDistribution {
                positives: 3,
                negatives: 0,
            });
        let v = decode(&wasm_result(r));
        let msg = v["error"].as_str().unwrap();
        assert!(msg.contains("degenerate class distribution"));
        assert!(msg.contains("3 positive / 0 negative"));
        assert!(v.get("ok").is_none());
    }

    #[test]
    fn length_mismatch_becomes_error_message() {
        let r: perfcurve_core::Result<f64> = Err(PerfCurveError::InvalidInput(
            "labels and scores differ in length: 2 vs 3".into(),
        ));
        let v = decode(&wasm_result(r));
        assert!(v["error"].as_str().unwrap().contains("2 vs 3"));
    }

    #[test]
    fn parse_json_names_argument() {
        let err = parse_json::<Vec<f64>>("labels", "[1, oops]").unwrap_err();
        assert!(matches!(err, PerfCurveError::Serialization(_)));
        assert!(err.to_string().contains("invalid labels JSON"));
    }
}
