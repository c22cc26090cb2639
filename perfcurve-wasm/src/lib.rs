//! WASM bindings for the perfcurve metrics.
//!
//! This crate provides in-memory, JSON-based wrappers around
//! `perfcurve-metrics` for browser charting layers. Every public function
//! accepts `&str` arguments and returns a JSON `String`:
//!
//! - Success: `{"ok": <value>}`
//! - Failure: `{"error": "<message>"}`
//!
//! `#[wasm_bindgen]` annotations are only applied with the `wasm` feature.
//!
//! # Example
//!
//! ```
//! let json = perfcurve_wasm::auc("[0,0,1,1]", "[0.1,0.4,0.35,0.8]");
//! let v: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert!((v["ok"].as_f64().unwrap() - 0.75).abs() < 1e-12);
//! ```

pub mod error;
pub mod metrics;

/// Crate version (set from Cargo.toml at compile time).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use metrics::{
    auc, auc_chart_data, auc_chart_data_with, auc_with, roc_curve, roc_curve_with,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn reexports_accessible() {
        let _ = roc_curve("[0,1]", "[0.2,0.8]");
        let _ = auc("[0,1]", "[0.2,0.8]");
        let _ = auc_with("[0,1]", "[0.2,0.8]", "all");
        let _ = auc_chart_data(r#"{"true_y": []}"#);
    }
}
