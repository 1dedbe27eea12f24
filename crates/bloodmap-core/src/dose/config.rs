//! DoseGuard configuration.
//!
//! Every tunable that call sites adjust per region or product variant lives
//! here with a conservative default. Callers own persistence of per-user
//! overrides.

use serde::{Deserialize, Serialize};

use crate::models::Drug;

/// Per-drug dosing parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugDoseParams {
    /// Default single dose, mg per kg body weight.
    pub mg_per_kg: f64,
    /// Accepted mg/kg range around the default.
    pub mg_per_kg_range: (f64, f64),
    /// Syrup concentration, mg per 5 mL.
    pub syrup_mg_per_5ml: f64,
    /// Minimum interval between doses, hours.
    pub cooldown_hours: i64,
    /// 24 h cumulative cap, mg per kg per day.
    pub per_kg_day_max: f64,
    /// Absolute 24 h cumulative cap, mg.
    pub day_max_mg: f64,
    /// Adult single-dose clamp band, mg.
    pub adult_single_range_mg: (f64, f64),
}

/// Full DoseGuard configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoseConfig {
    pub apap: DrugDoseParams,
    pub ibu: DrugDoseParams,
    /// Assumed weight for an adult with no recorded weight, kg.
    pub adult_default_weight_kg: f64,
    /// Ibuprofen hard age floor, months.
    pub ibu_min_age_months: u32,
    /// Platelet threshold (10^3/µL) below which NSAIDs are blocked.
    pub plt_block_threshold_k: f64,
    /// eGFR below this warns on ibuprofen.
    pub egfr_warn_below: f64,
    /// Creatinine above this warns on ibuprofen.
    pub creatinine_warn_above: f64,
    /// AST/ALT at or above this (≈3× upper-limit-normal) warns on
    /// acetaminophen.
    pub transaminase_warn_at: f64,
}

impl Default for DoseConfig {
    fn default() -> Self {
        Self {
            apap: DrugDoseParams {
                mg_per_kg: 12.5,
                mg_per_kg_range: (10.0, 15.0),
                syrup_mg_per_5ml: 160.0,
                cooldown_hours: 4,
                per_kg_day_max: 75.0,
                day_max_mg: 4000.0,
                adult_single_range_mg: (325.0, 1000.0),
            },
            ibu: DrugDoseParams {
                mg_per_kg: 7.5,
                mg_per_kg_range: (5.0, 10.0),
                syrup_mg_per_5ml: 100.0,
                // Some product labels say 6-8 h; 6 is the conservative
                // default, the knob is here for the 8 h variants.
                cooldown_hours: 6,
                per_kg_day_max: 30.0,
                day_max_mg: 1200.0,
                adult_single_range_mg: (200.0, 400.0),
            },
            adult_default_weight_kg: 60.0,
            ibu_min_age_months: 6,
            plt_block_threshold_k: 50.0,
            egfr_warn_below: 60.0,
            creatinine_warn_above: 1.3,
            transaminase_warn_at: 120.0,
        }
    }
}

impl DoseConfig {
    /// Parameters for one drug.
    pub fn params(&self, drug: Drug) -> &DrugDoseParams {
        match drug {
            Drug::Apap => &self.apap,
            Drug::Ibu => &self.ibu,
        }
    }
}
