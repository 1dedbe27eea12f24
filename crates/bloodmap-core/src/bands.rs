//! Numeric band classification helpers.
//!
//! Leaf layer: fever bands from a °C reading and reference-range flags for
//! the lab values the rest of the core reads. No dependencies on the other
//! modules.

use serde::{Deserialize, Serialize};

/// Fever severity band.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum FeverBand {
    /// Below 37.5 °C or temperature unknown.
    #[default]
    Afebrile,
    /// 37.5–38.0 °C.
    Low,
    /// 38.0–38.5 °C.
    Moderate,
    /// 38.5–39.0 °C.
    High,
    /// 39.0 °C and above.
    VeryHigh,
}

impl FeverBand {
    /// Band a temperature reading. `None` and non-finite values are afebrile.
    pub fn from_temp(temp_c: Option<f64>) -> Self {
        let Some(t) = temp_c.filter(|t| t.is_finite()) else {
            return Self::Afebrile;
        };
        if t >= 39.0 {
            Self::VeryHigh
        } else if t >= 38.5 {
            Self::High
        } else if t >= 38.0 {
            Self::Moderate
        } else if t >= 37.5 {
            Self::Low
        } else {
            Self::Afebrile
        }
    }

    /// Any fever at all.
    pub fn is_febrile(&self) -> bool {
        *self > Self::Afebrile
    }
}

/// Absolute neutrophil count severity band (cells/µL).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum AncBand {
    Normal,
    /// ANC 1000–1500: mild neutropenia.
    Mild,
    /// ANC 500–1000: moderate neutropenia.
    Moderate,
    /// ANC below 500: severe neutropenia, high infection risk.
    Severe,
}

impl AncBand {
    pub fn from_anc(anc: f64) -> Self {
        if !anc.is_finite() || anc < 0.0 {
            return Self::Normal; // unknown is not reported as abnormal
        }
        if anc < 500.0 {
            Self::Severe
        } else if anc < 1000.0 {
            Self::Moderate
        } else if anc < 1500.0 {
            Self::Mild
        } else {
            Self::Normal
        }
    }
}

/// Position of a lab value relative to its reference range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RangeFlag {
    Low,
    Normal,
    High,
}

/// Classify a value against an inclusive reference range.
pub fn range_flag(value: f64, low: f64, high: f64) -> RangeFlag {
    if !value.is_finite() {
        return RangeFlag::Normal;
    }
    if value < low {
        RangeFlag::Low
    } else if value > high {
        RangeFlag::High
    } else {
        RangeFlag::Normal
    }
}
