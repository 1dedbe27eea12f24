//! DoseGuard: weight/age-based antipyretic dosing with safety-interval
//! enforcement.
//!
//! Pipeline per call: resolve the working weight → compute the per-dose
//! mg/mL → check cooldown, the rolling 24 h ceiling, age and lab
//! contraindications. The computed recommendation is always returned, even
//! when blocked. `now` is an explicit parameter; nothing reads a clock.

mod config;

pub use config::{DoseConfig, DrugDoseParams};

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::{BlockReason, DoseLogEntry, DoseRecommendation, DoseWarning, Drug, LabSnapshot};

/// The KST (+09:00) offset the original deployment runs in. Nothing else
/// in the core is timezone-specific; `now` carries its own offset.
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("+09:00 is a valid fixed offset")
}

/// Patient biometrics, defensively coerced at construction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Biometrics {
    pub age_months: Option<u32>,
    pub weight_kg: Option<f64>,
    pub is_adult: bool,
}

impl Biometrics {
    /// Build from raw caller values. Negative, zero, or non-finite numbers
    /// become `None` rather than an error.
    pub fn from_raw(age_months: Option<f64>, weight_kg: Option<f64>, is_adult: bool) -> Self {
        Self {
            age_months: age_months
                .filter(|a| a.is_finite() && *a >= 0.0)
                .map(|a| a as u32),
            weight_kg: weight_kg.filter(|w| w.is_finite() && *w > 0.0),
            is_adult,
        }
    }
}

/// Weight used for dosing: measured if available, otherwise estimated.
fn resolve_weight(biometrics: &Biometrics, config: &DoseConfig) -> (f64, bool) {
    if let Some(w) = biometrics.weight_kg {
        return (w, false);
    }
    if let Some(age) = biometrics.age_months {
        return (estimate_weight_kg(age), true);
    }
    if biometrics.is_adult {
        return (config.adult_default_weight_kg, true);
    }
    // No weight, no age, not an adult: nothing safe can be computed.
    (0.0, true)
}

/// Two-segment age-based weight estimate.
pub fn estimate_weight_kg(age_months: u32) -> f64 {
    if age_months < 12 {
        3.3 + 0.5 * age_months as f64
    } else {
        2.0 * (age_months as f64 / 12.0) + 8.0
    }
}

/// Produce a dose recommendation with all safety checks applied.
pub fn recommend(
    drug: Drug,
    biometrics: &Biometrics,
    dose_log: &[DoseLogEntry],
    now: DateTime<FixedOffset>,
    labs: Option<&LabSnapshot>,
    config: &DoseConfig,
) -> DoseRecommendation {
    let params = config.params(drug);
    let (weight_kg, estimated) = resolve_weight(biometrics, config);

    let mut dose_mg = weight_kg * params.mg_per_kg;
    if biometrics.is_adult && dose_mg > 0.0 {
        let (lo, hi) = params.adult_single_range_mg;
        dose_mg = dose_mg.clamp(lo, hi);
    }
    let dose_ml = dose_mg * 5.0 / params.syrup_mg_per_5ml;

    let mut blocks = Vec::new();
    let mut warnings = Vec::new();

    if estimated && weight_kg > 0.0 {
        warnings.push(DoseWarning::EstimatedWeight {
            estimated_kg: weight_kg,
        });
    }

    // Age hard rule: no ibuprofen under the configured floor.
    if drug == Drug::Ibu
        && biometrics
            .age_months
            .is_some_and(|a| a < config.ibu_min_age_months)
    {
        blocks.push(BlockReason::UnderSixMonths);
    }

    // Lab contraindications, read defensively: missing keys trigger nothing.
    if let Some(labs) = labs {
        match drug {
            Drug::Ibu => {
                if let Some(plt) = labs.platelets_k() {
                    if plt < config.plt_block_threshold_k {
                        blocks.push(BlockReason::LowPlatelets { platelets_k: plt });
                    }
                }
                let egfr_low = labs.egfr().is_some_and(|v| v < config.egfr_warn_below);
                let cr_high = labs
                    .creatinine()
                    .is_some_and(|v| v > config.creatinine_warn_above);
                if egfr_low || cr_high {
                    warnings.push(DoseWarning::RenalCaution {
                        egfr: labs.egfr(),
                        creatinine: labs.creatinine(),
                    });
                }
            }
            Drug::Apap => {
                let ast_high = labs.ast().is_some_and(|v| v >= config.transaminase_warn_at);
                let alt_high = labs.alt().is_some_and(|v| v >= config.transaminase_warn_at);
                if ast_high || alt_high {
                    warnings.push(DoseWarning::HepaticCaution {
                        ast: labs.ast(),
                        alt: labs.alt(),
                    });
                }
            }
        }
    }

    // Cooldown from the most recent same-drug dose. Malformed timestamps
    // are skipped.
    let last_dose_at = dose_log
        .iter()
        .filter(|e| e.drug == drug)
        .filter_map(|e| e.given_at_parsed())
        .max();
    let next_eligible_at = last_dose_at.map(|t| t + Duration::hours(params.cooldown_hours));
    if let Some(next) = next_eligible_at {
        if now < next {
            blocks.push(BlockReason::CooldownNotElapsed {
                next_eligible_at: next,
            });
        }
    }

    // Rolling 24 h cumulative ceiling.
    let window_start = now - Duration::hours(24);
    let total_24h_mg: f64 = dose_log
        .iter()
        .filter(|e| e.drug == drug)
        .filter_map(|e| e.given_at_parsed().map(|t| (t, e.dose_mg)))
        .filter(|(t, _)| *t > window_start && *t <= now)
        .map(|(_, mg)| mg)
        .sum();
    let ceiling_24h_mg = (params.per_kg_day_max * weight_kg).min(params.day_max_mg);
    if total_24h_mg + dose_mg > ceiling_24h_mg {
        blocks.push(BlockReason::DailyCeilingExceeded {
            total_24h_mg,
            ceiling_mg: ceiling_24h_mg,
        });
    }

    DoseRecommendation {
        drug,
        dose_mg,
        dose_ml,
        weight_kg_used: weight_kg,
        weight_estimated: estimated,
        next_eligible_at,
        total_24h_mg,
        ceiling_24h_mg,
        blocks,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).expect("valid offset")
    }

    fn at(h: u32, m: u32) -> DateTime<FixedOffset> {
        kst().with_ymd_and_hms(2025, 6, 10, h, m, 0).single().expect("valid time")
    }

    #[test]
    fn test_weight_estimation_segments() {
        assert!((estimate_weight_kg(0) - 3.3).abs() < 1e-9);
        assert!((estimate_weight_kg(6) - 6.3).abs() < 1e-9);
        assert!((estimate_weight_kg(24) - 12.0).abs() < 1e-9);
        assert!((estimate_weight_kg(60) - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_biometrics_coercion() {
        let b = Biometrics::from_raw(Some(-3.0), Some(f64::NAN), false);
        assert_eq!(b.age_months, None);
        assert_eq!(b.weight_kg, None);

        let b = Biometrics::from_raw(Some(18.0), Some(0.0), false);
        assert_eq!(b.age_months, Some(18));
        assert_eq!(b.weight_kg, None);
    }

    #[test]
    fn test_pediatric_dose_from_measured_weight() {
        let b = Biometrics::from_raw(Some(24.0), Some(12.0), false);
        let rec = recommend(Drug::Apap, &b, &[], at(9, 0), None, &DoseConfig::default());
        assert!((rec.dose_mg - 150.0).abs() < 1e-9); // 12 kg * 12.5
        assert!((rec.dose_ml - 4.6875).abs() < 1e-9); // 150 * 5 / 160
        assert!(!rec.weight_estimated);
        assert!(rec.warnings.is_empty());
        assert!(!rec.is_blocked());
    }

    #[test]
    fn test_estimated_weight_is_flagged() {
        let b = Biometrics::from_raw(Some(24.0), None, false);
        let rec = recommend(Drug::Apap, &b, &[], at(9, 0), None, &DoseConfig::default());
        assert!(rec.weight_estimated);
        assert!((rec.weight_kg_used - 12.0).abs() < 1e-9);
        assert!(matches!(
            rec.warnings[0],
            DoseWarning::EstimatedWeight { .. }
        ));
    }

    #[test]
    fn test_adult_clamp_band() {
        // 60 kg adult, APAP: 750 mg, inside [325, 1000].
        let adult = Biometrics::from_raw(None, Some(60.0), true);
        let rec = recommend(Drug::Apap, &adult, &[], at(9, 0), None, &DoseConfig::default());
        assert!((rec.dose_mg - 750.0).abs() < 1e-9);

        // 120 kg adult would compute 1500 mg; clamped to 1000.
        let heavy = Biometrics::from_raw(None, Some(120.0), true);
        let rec = recommend(Drug::Apap, &heavy, &[], at(9, 0), None, &DoseConfig::default());
        assert!((rec.dose_mg - 1000.0).abs() < 1e-9);

        // IBU clamps into [200, 400].
        let light = Biometrics::from_raw(None, Some(20.0), true);
        let rec = recommend(Drug::Ibu, &light, &[], at(9, 0), None, &DoseConfig::default());
        assert!((rec.dose_mg - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_adult_without_weight_assumes_default() {
        let b = Biometrics::from_raw(None, None, true);
        let rec = recommend(Drug::Ibu, &b, &[], at(9, 0), None, &DoseConfig::default());
        assert!((rec.weight_kg_used - 60.0).abs() < 1e-9);
        assert!(rec.weight_estimated);
    }

    #[test]
    fn test_no_information_degrades_to_zero_dose() {
        let b = Biometrics::default();
        let rec = recommend(Drug::Apap, &b, &[], at(9, 0), None, &DoseConfig::default());
        assert_eq!(rec.dose_mg, 0.0);
        assert!(!rec.is_blocked());
    }

    #[test]
    fn test_malformed_log_entries_are_skipped() {
        let b = Biometrics::from_raw(Some(36.0), Some(14.0), false);
        let bad = DoseLogEntry {
            entry_id: "x".into(),
            drug: Drug::Apap,
            dose_mg: 175.0,
            given_at: "not a timestamp".into(),
        };
        let rec = recommend(Drug::Apap, &b, &[bad], at(9, 0), None, &DoseConfig::default());
        assert_eq!(rec.total_24h_mg, 0.0);
        assert!(rec.next_eligible_at.is_none());
        assert!(!rec.is_blocked());
    }

    #[test]
    fn test_other_drug_doses_do_not_count() {
        let b = Biometrics::from_raw(Some(36.0), Some(14.0), false);
        let ibu = DoseLogEntry::new(Drug::Ibu, 100.0, at(8, 30));
        let rec = recommend(Drug::Apap, &b, &[ibu], at(9, 0), None, &DoseConfig::default());
        assert_eq!(rec.total_24h_mg, 0.0);
        assert!(rec.next_eligible_at.is_none());
    }
}
