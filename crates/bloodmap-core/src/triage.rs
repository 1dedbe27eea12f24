//! Triage aggregator.
//!
//! Ordered-rule precedence, first match wins. This is deliberately NOT a
//! weighted sum: higher-severity rules short-circuit lower ones, and the
//! candidate scores can never escalate the tier on their own.

use crate::models::{RedFlagSet, TriageLevel, TriageResult};

/// Any fever in an infant under this age is automatically urgent.
const INFANT_AGE_MONTHS: u32 = 3;
/// Fever threshold for the infant rule, °C.
const INFANT_FEVER_C: f64 = 38.0;
/// Fever that is urgent at any age, °C.
const URGENT_FEVER_C: f64 = 39.0;
/// Fever that warrants caution, °C.
const CAUTION_FEVER_C: f64 = 38.5;
/// Soft red flags that must co-occur to reach caution.
const SOFT_FLAG_CAUTION_COUNT: usize = 2;

/// Derive the severity tier from temperature, age, and red flags.
///
/// `top_candidate_score` only flavors the advisory text of stable results;
/// per the precedence contract it never decides the tier.
pub fn triage(
    temp_c: Option<f64>,
    age_months: Option<u32>,
    red_flags: &RedFlagSet,
    top_candidate_score: Option<f64>,
) -> TriageResult {
    let temp = temp_c.filter(|t| t.is_finite());

    // 1. Infant with any fever.
    if age_months.is_some_and(|a| a < INFANT_AGE_MONTHS)
        && temp.is_some_and(|t| t >= INFANT_FEVER_C)
    {
        return TriageResult {
            level: TriageLevel::Urgent,
            advisory: "Fever in an infant under 3 months: seek medical care now.".into(),
        };
    }

    // 2. High fever at any age.
    if temp.is_some_and(|t| t >= URGENT_FEVER_C) {
        return TriageResult {
            level: TriageLevel::Urgent,
            advisory: "Temperature of 39.0 °C or above: seek medical care now.".into(),
        };
    }

    // 3. Any hard red flag.
    if red_flags.any_hard() {
        return TriageResult {
            level: TriageLevel::Urgent,
            advisory: "A serious warning sign is present: seek medical care now.".into(),
        };
    }

    // 4. Moderate fever, or two or more soft flags together.
    if temp.is_some_and(|t| t >= CAUTION_FEVER_C)
        || red_flags.soft_count() >= SOFT_FLAG_CAUTION_COUNT
    {
        return TriageResult {
            level: TriageLevel::Caution,
            advisory: "Monitor closely and contact your care team if symptoms persist or worsen."
                .into(),
        };
    }

    // 5. Stable.
    let advisory = if top_candidate_score.is_some_and(|s| s >= 60.0) {
        "Currently stable; keep tracking the symptoms already noted.".into()
    } else {
        "Currently stable; continue home care and routine monitoring.".into()
    };
    TriageResult {
        level: TriageLevel::Stable,
        advisory,
    }
}
