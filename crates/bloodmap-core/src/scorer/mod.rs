//! Weighted-evidence symptom scorer.
//!
//! Accumulates additive rule weights per candidate, clamps to [0, 100],
//! and returns the top three in descending score order. Ties keep the
//! vocabulary declaration order (stable sort). Never errors: an observation
//! that fires no rule still yields the vocabulary head at score zero.

mod rules;

use serde::{Deserialize, Serialize};

use crate::models::{ConditionCandidate, SymptomObservation};

/// Which rule table to score against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RuleProfile {
    Adult,
    /// Canonical pediatric table (eye-enhanced weights).
    Pediatric,
    /// Pre-enhancement pediatric weights, kept as an enumerable variant.
    PediatricLegacy,
}

/// Maximum number of candidates returned.
const TOP_N: usize = 3;

/// Score an observation against a rule profile.
///
/// Returns `min(TOP_N, vocabulary len)` candidates, descending by score,
/// ties in vocabulary order.
pub fn score(observation: &SymptomObservation, profile: RuleProfile) -> Vec<ConditionCandidate> {
    let set = rules::rule_set(profile);

    // Accumulate in vocabulary order so the later stable sort preserves
    // declaration order among equal scores.
    let mut candidates: Vec<ConditionCandidate> = set
        .vocabulary
        .iter()
        .map(|c| ConditionCandidate {
            condition: *c,
            score: 0,
            reasons: Vec::new(),
        })
        .collect();

    for r in &set.rules {
        if (r.applies)(observation) {
            if let Some(c) = candidates.iter_mut().find(|c| c.condition == r.target) {
                c.score += r.points;
                c.reasons.push(r.reason.to_string());
            }
        }
    }

    for c in &mut candidates {
        c.score = c.score.clamp(0, 100);
    }

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(TOP_N);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CoughLevel, EyeDischarge, EyeLaterality, NasalDischarge, StoolFrequency, WheezeLevel,
    };
    use crate::models::Condition;

    #[test]
    fn test_empty_observation_returns_vocabulary_head_at_zero() {
        let out = score(&SymptomObservation::default(), RuleProfile::Pediatric);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|c| c.score == 0));
        assert_eq!(out[0].condition, Condition::ViralUri);
        assert_eq!(out[1].condition, Condition::InfluenzaLike);
        assert_eq!(out[2].condition, Condition::RotavirusGastroenteritis);
    }

    #[test]
    fn test_scores_are_clamped() {
        // Everything at once: individual sums would exceed 100.
        let obs = SymptomObservation {
            nasal: NasalDischarge::Clear,
            cough: CoughLevel::Severe,
            stool: StoolFrequency::SevenPlus,
            eye_discharge: EyeDischarge::PurulentYellow,
            eye_laterality: EyeLaterality::Bilateral,
            wheeze: WheezeLevel::Marked,
            persistent_vomiting: true,
            abdominal_pain: true,
            ear_pain: true,
            migraine_headache: true,
            hand_foot_mouth: true,
            nighttime_worsening: true,
            age_months: Some(18),
            temp_c: Some(39.5),
            ..Default::default()
        };
        for c in score(&obs, RuleProfile::Pediatric) {
            assert!((0..=100).contains(&c.score));
        }
    }

    #[test]
    fn test_negative_evidence_never_goes_below_zero() {
        // Pure diarrhea: respiratory candidates take the -40 penalty from 0.
        let obs = SymptomObservation {
            stool: StoolFrequency::SevenPlus,
            ..Default::default()
        };
        let all = score(&obs, RuleProfile::Pediatric);
        assert!(all.iter().all(|c| c.score >= 0));
    }

    #[test]
    fn test_gastroenteritis_heuristic_ranks_ge_first() {
        let obs = SymptomObservation {
            stool: StoolFrequency::SevenPlus,
            temp_c: Some(37.8),
            ..Default::default()
        };
        let out = score(&obs, RuleProfile::Pediatric);
        assert!(out[0].condition.is_gastroenteritis());
        assert!(out[0].score > 0);
        let top_score = out[0].score;
        assert!(out
            .iter()
            .filter(|c| c.condition.is_respiratory())
            .all(|c| c.score < top_score));
    }

    #[test]
    fn test_wheezy_infant_raises_bronchiolitis() {
        let obs = SymptomObservation {
            wheeze: WheezeLevel::Marked,
            cough: CoughLevel::Frequent,
            age_months: Some(10),
            ..Default::default()
        };
        let out = score(&obs, RuleProfile::Pediatric);
        assert_eq!(out[0].condition, Condition::BronchiolitisRsvLike);
        assert_eq!(out[0].score, 65);
    }

    #[test]
    fn test_eye_enhanced_profile_separates_viral_from_bacterial() {
        // Bilateral watery eyes + fever + runny nose: adenoviral.
        let viral = SymptomObservation {
            eye_discharge: EyeDischarge::Clear,
            eye_laterality: EyeLaterality::Bilateral,
            nasal: NasalDischarge::Clear,
            temp_c: Some(38.3),
            ..Default::default()
        };
        let out = score(&viral, RuleProfile::Pediatric);
        let adeno = out
            .iter()
            .find(|c| c.condition == Condition::AdenoviralConjunctivitis)
            .expect("adenoviral conjunctivitis in top 3");
        let bacterial_score = score(&viral, RuleProfile::Pediatric)
            .iter()
            .find(|c| c.condition == Condition::BacterialConjunctivitis)
            .map(|c| c.score)
            .unwrap_or(0);
        assert!(adeno.score > bacterial_score);

        // Purulent one-eyed discharge, no fever: bacterial.
        let bacterial = SymptomObservation {
            eye_discharge: EyeDischarge::PurulentYellow,
            eye_laterality: EyeLaterality::Unilateral,
            ..Default::default()
        };
        let out = score(&bacterial, RuleProfile::Pediatric);
        assert_eq!(out[0].condition, Condition::BacterialConjunctivitis);
    }

    #[test]
    fn test_legacy_profile_lacks_laterality_bonus() {
        let obs = SymptomObservation {
            eye_discharge: EyeDischarge::Clear,
            eye_laterality: EyeLaterality::Bilateral,
            temp_c: Some(38.3),
            ..Default::default()
        };
        let canonical = score(&obs, RuleProfile::Pediatric);
        let legacy = score(&obs, RuleProfile::PediatricLegacy);
        let find = |out: &[ConditionCandidate]| {
            out.iter()
                .find(|c| c.condition == Condition::AdenoviralConjunctivitis)
                .map(|c| c.score)
                .unwrap_or(0)
        };
        assert!(find(&canonical) > find(&legacy));
    }

    #[test]
    fn test_adult_profile_uses_adult_vocabulary() {
        let obs = SymptomObservation {
            migraine_headache: true,
            ..Default::default()
        };
        let out = score(&obs, RuleProfile::Adult);
        assert_eq!(out[0].condition, Condition::MigraineLike);
        assert_eq!(out[0].score, 55);
    }

    #[test]
    fn test_determinism() {
        let obs = SymptomObservation {
            nasal: NasalDischarge::Clear,
            cough: CoughLevel::Occasional,
            temp_c: Some(38.1),
            ..Default::default()
        };
        let first = score(&obs, RuleProfile::Pediatric);
        for _ in 0..5 {
            assert_eq!(score(&obs, RuleProfile::Pediatric), first);
        }
    }

    #[test]
    fn test_reasons_accompany_fired_rules() {
        let obs = SymptomObservation {
            ear_pain: true,
            temp_c: Some(38.4),
            ..Default::default()
        };
        let out = score(&obs, RuleProfile::Pediatric);
        assert_eq!(out[0].condition, Condition::BacterialOtitisSuspected);
        assert!(out[0].reasons.iter().any(|r| r.contains("ear pain")));
    }
}
