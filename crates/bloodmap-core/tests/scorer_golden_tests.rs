//! Golden tests for the symptom scorer.
//!
//! Each case pins the expected top-ranked candidate for a representative
//! caregiver scenario.

use bloodmap_core::models::{
    Condition, CoughLevel, EyeDischarge, EyeLaterality, NasalDischarge, StoolFrequency,
    SymptomObservation, WheezeLevel,
};
use bloodmap_core::scorer::{score, RuleProfile};

struct GoldenCase {
    id: &'static str,
    observation: SymptomObservation,
    profile: RuleProfile,
    expected_top: Condition,
    min_top_score: i32,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "peds-watery-diarrhea",
            observation: SymptomObservation {
                stool: StoolFrequency::SevenPlus,
                temp_c: Some(37.8),
                ..Default::default()
            },
            profile: RuleProfile::Pediatric,
            expected_top: Condition::RotavirusGastroenteritis,
            min_top_score: 40,
        },
        GoldenCase {
            id: "peds-rotavirus-toddler",
            observation: SymptomObservation {
                stool: StoolFrequency::SevenPlus,
                persistent_vomiting: true,
                temp_c: Some(38.3),
                age_months: Some(12),
                ..Default::default()
            },
            profile: RuleProfile::Pediatric,
            expected_top: Condition::RotavirusGastroenteritis,
            min_top_score: 85,
        },
        GoldenCase {
            id: "peds-norovirus-vomiting-predominant",
            observation: SymptomObservation {
                stool: StoolFrequency::FourToSix,
                persistent_vomiting: true,
                temp_c: Some(37.3),
                age_months: Some(60),
                ..Default::default()
            },
            profile: RuleProfile::Pediatric,
            expected_top: Condition::NorovirusGastroenteritis,
            min_top_score: 70,
        },
        GoldenCase {
            id: "peds-common-cold",
            observation: SymptomObservation {
                nasal: NasalDischarge::Clear,
                cough: CoughLevel::Occasional,
                temp_c: Some(37.9),
                ..Default::default()
            },
            profile: RuleProfile::Pediatric,
            expected_top: Condition::ViralUri,
            min_top_score: 60,
        },
        GoldenCase {
            id: "peds-influenza-like",
            observation: SymptomObservation {
                cough: CoughLevel::Severe,
                migraine_headache: true,
                temp_c: Some(39.2),
                ..Default::default()
            },
            profile: RuleProfile::Pediatric,
            expected_top: Condition::InfluenzaLike,
            min_top_score: 65,
        },
        GoldenCase {
            id: "peds-otitis",
            observation: SymptomObservation {
                ear_pain: true,
                nighttime_worsening: true,
                temp_c: Some(38.2),
                ..Default::default()
            },
            profile: RuleProfile::Pediatric,
            expected_top: Condition::BacterialOtitisSuspected,
            min_top_score: 60,
        },
        GoldenCase {
            id: "peds-bronchiolitis-infant",
            observation: SymptomObservation {
                wheeze: WheezeLevel::Marked,
                cough: CoughLevel::Frequent,
                age_months: Some(8),
                ..Default::default()
            },
            profile: RuleProfile::Pediatric,
            expected_top: Condition::BronchiolitisRsvLike,
            min_top_score: 60,
        },
        GoldenCase {
            id: "peds-hand-foot-mouth",
            observation: SymptomObservation {
                hand_foot_mouth: true,
                temp_c: Some(38.1),
                age_months: Some(30),
                ..Default::default()
            },
            profile: RuleProfile::Pediatric,
            expected_top: Condition::HandFootMouth,
            min_top_score: 70,
        },
        GoldenCase {
            id: "peds-bacterial-conjunctivitis",
            observation: SymptomObservation {
                eye_discharge: EyeDischarge::PurulentYellow,
                eye_laterality: EyeLaterality::Unilateral,
                ..Default::default()
            },
            profile: RuleProfile::Pediatric,
            expected_top: Condition::BacterialConjunctivitis,
            min_top_score: 55,
        },
        GoldenCase {
            id: "peds-allergic-conjunctivitis",
            observation: SymptomObservation {
                eye_discharge: EyeDischarge::Itchy,
                eye_laterality: EyeLaterality::Bilateral,
                ..Default::default()
            },
            profile: RuleProfile::Pediatric,
            expected_top: Condition::AllergicConjunctivitis,
            min_top_score: 50,
        },
        GoldenCase {
            id: "adult-migraine",
            observation: SymptomObservation {
                migraine_headache: true,
                persistent_vomiting: true,
                ..Default::default()
            },
            profile: RuleProfile::Adult,
            expected_top: Condition::MigraineLike,
            min_top_score: 60,
        },
        GoldenCase {
            id: "adult-sinusitis",
            observation: SymptomObservation {
                nasal: NasalDischarge::YellowGreen,
                temp_c: Some(38.3),
                ..Default::default()
            },
            profile: RuleProfile::Adult,
            expected_top: Condition::BacterialSinusitisSuspected,
            min_top_score: 45,
        },
        GoldenCase {
            id: "adult-gastroenteritis",
            observation: SymptomObservation {
                stool: StoolFrequency::FourToSix,
                persistent_vomiting: true,
                abdominal_pain: true,
                ..Default::default()
            },
            profile: RuleProfile::Adult,
            expected_top: Condition::ViralGastroenteritis,
            min_top_score: 65,
        },
    ]
}

#[test]
fn test_golden_cases() {
    for case in get_golden_cases() {
        let out = score(&case.observation, case.profile);
        assert!(!out.is_empty(), "[{}] empty result", case.id);
        assert_eq!(
            out[0].condition, case.expected_top,
            "[{}] expected {:?} on top, got {:?} (score {})",
            case.id, case.expected_top, out[0].condition, out[0].score
        );
        assert!(
            out[0].score >= case.min_top_score,
            "[{}] top score {} below expected {}",
            case.id,
            out[0].score,
            case.min_top_score
        );
    }
}

#[test]
fn test_golden_cases_return_sorted_top_three() {
    for case in get_golden_cases() {
        let out = score(&case.observation, case.profile);
        assert_eq!(out.len(), 3, "[{}]", case.id);
        assert!(
            out.windows(2).all(|w| w[0].score >= w[1].score),
            "[{}] not sorted descending",
            case.id
        );
        for c in &out {
            assert!((0..=100).contains(&c.score), "[{}] score out of bounds", case.id);
        }
    }
}

#[test]
fn test_golden_cases_have_reasons_on_top_candidate() {
    for case in get_golden_cases() {
        let out = score(&case.observation, case.profile);
        assert!(
            !out[0].reasons.is_empty(),
            "[{}] top candidate fired no rules",
            case.id
        );
    }
}

#[test]
fn test_all_zero_observation_keeps_vocabulary_order() {
    let out = score(&SymptomObservation::default(), RuleProfile::Adult);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].condition, Condition::ViralUri);
    assert_eq!(out[1].condition, Condition::InfluenzaLike);
    assert_eq!(out[2].condition, Condition::ViralGastroenteritis);
    assert!(out.iter().all(|c| c.score == 0));
}

#[test]
fn test_unknown_categorical_strings_score_like_absent() {
    let garbage = SymptomObservation {
        nasal: NasalDischarge::from_input("mystery value"),
        cough: CoughLevel::from_input(""),
        stool: StoolFrequency::from_input("lots and lots"),
        eye_discharge: EyeDischarge::from_input("☆"),
        ..Default::default()
    };
    assert_eq!(
        score(&garbage, RuleProfile::Pediatric),
        score(&SymptomObservation::default(), RuleProfile::Pediatric)
    );
}
