//! Lab snapshot value object.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bands::AncBand;

/// A point-in-time snapshot of lab values, keyed by canonical abbreviation.
///
/// The core only reads specific keys, and it reads them defensively:
/// a missing or malformed value is "unknown" and triggers nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabSnapshot {
    values: HashMap<String, f64>,
}

impl LabSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a loosely-typed JSON object, as the UI layer supplies it.
    /// Numbers are taken as-is; numeric strings are parsed; everything else
    /// is dropped.
    pub fn from_json_map(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut snapshot = Self::new();
        for (key, value) in map {
            let parsed = match value {
                serde_json::Value::Number(n) => n.as_f64(),
                serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            if let Some(v) = parsed.filter(|v| v.is_finite()) {
                snapshot.set(key, v);
            }
        }
        snapshot
    }

    /// Store a value under the canonical form of `key`.
    pub fn set(&mut self, key: &str, value: f64) {
        self.values.insert(canonical_key(key), value);
    }

    /// Read a value by key (case/punctuation-insensitive).
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(&canonical_key(key)).copied()
    }

    /// Platelet count in 10^3/µL. Values that look like raw counts per µL
    /// (≥ 10,000) are normalized down.
    pub fn platelets_k(&self) -> Option<f64> {
        self.get("PLT").map(|v| if v >= 10_000.0 { v / 1000.0 } else { v })
    }

    pub fn egfr(&self) -> Option<f64> {
        self.get("eGFR")
    }

    pub fn creatinine(&self) -> Option<f64> {
        self.get("Cr")
    }

    pub fn ast(&self) -> Option<f64> {
        self.get("AST")
    }

    pub fn alt(&self) -> Option<f64> {
        self.get("ALT")
    }

    /// Absolute neutrophil count, cells/µL.
    pub fn anc(&self) -> Option<f64> {
        self.get("ANC")
    }

    /// Neutropenia band for the stored ANC, if any.
    pub fn anc_band(&self) -> Option<AncBand> {
        self.anc().map(AncBand::from_anc)
    }
}

/// Canonical lab key: uppercase alphanumerics only ("e-GFR" == "EGFR").
fn canonical_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_canonicalization() {
        let mut labs = LabSnapshot::new();
        labs.set("e-GFR", 85.0);
        assert_eq!(labs.get("egfr"), Some(85.0));
        assert_eq!(labs.egfr(), Some(85.0));
        assert_eq!(labs.get("PLT"), None);
    }

    #[test]
    fn test_platelet_unit_normalization() {
        let mut labs = LabSnapshot::new();
        labs.set("PLT", 42.0); // already 10^3/µL
        assert_eq!(labs.platelets_k(), Some(42.0));

        labs.set("PLT", 42_000.0); // raw /µL
        assert_eq!(labs.platelets_k(), Some(42.0));
    }

    #[test]
    fn test_from_json_map_is_lenient() {
        let raw = serde_json::json!({
            "PLT": 38,
            "AST": "145",
            "ALT": "  52.5 ",
            "Cr": "pending",
            "note": true,
        });
        let labs = LabSnapshot::from_json_map(raw.as_object().unwrap());
        assert_eq!(labs.platelets_k(), Some(38.0));
        assert_eq!(labs.ast(), Some(145.0));
        assert_eq!(labs.alt(), Some(52.5));
        assert_eq!(labs.creatinine(), None);
    }

    #[test]
    fn test_anc_band_passthrough() {
        let mut labs = LabSnapshot::new();
        assert_eq!(labs.anc_band(), None);
        labs.set("ANC", 420.0);
        assert_eq!(labs.anc_band(), Some(crate::bands::AncBand::Severe));
    }
}
