//! Weighted evidence rule tables.
//!
//! Each rule checks the observation and, when satisfied, contributes a fixed
//! (possibly negative) point value to one candidate. Accumulation is
//! commutative; the weights themselves are the tuned contract. The pediatric
//! table comes in two enumerable variants: the canonical eye-enhanced rule
//! set and the legacy pre-enhancement one.

use crate::bands::FeverBand;
use crate::models::{
    Condition, CoughLevel, EyeDischarge, EyeLaterality, NasalDischarge, StoolFrequency,
    SymptomObservation, WheezeLevel,
};

use super::RuleProfile;

/// One weighted evidence rule.
pub(crate) struct EvidenceRule {
    pub target: Condition,
    pub points: i32,
    pub reason: &'static str,
    pub applies: fn(&SymptomObservation) -> bool,
}

/// A profile's vocabulary (in tie-break order) plus its rules.
pub(crate) struct RuleSet {
    pub vocabulary: &'static [Condition],
    pub rules: Vec<EvidenceRule>,
}

/// Pediatric candidate vocabulary, in declaration (tie-break) order.
const PEDIATRIC_VOCABULARY: &[Condition] = &[
    Condition::ViralUri,
    Condition::InfluenzaLike,
    Condition::RotavirusGastroenteritis,
    Condition::NorovirusGastroenteritis,
    Condition::ViralGastroenteritis,
    Condition::AdenoviralPharyngoconjunctivitis,
    Condition::BacterialOtitisSuspected,
    Condition::BacterialConjunctivitis,
    Condition::AdenoviralConjunctivitis,
    Condition::AllergicConjunctivitis,
    Condition::BronchiolitisRsvLike,
    Condition::HandFootMouth,
];

/// Adult candidate vocabulary, in declaration (tie-break) order.
const ADULT_VOCABULARY: &[Condition] = &[
    Condition::ViralUri,
    Condition::InfluenzaLike,
    Condition::ViralGastroenteritis,
    Condition::BacterialSinusitisSuspected,
    Condition::AllergicRhinitis,
    Condition::MigraineLike,
    Condition::BacterialConjunctivitis,
    Condition::AllergicConjunctivitis,
];

/// Build the rule set for a profile.
pub(crate) fn rule_set(profile: RuleProfile) -> RuleSet {
    match profile {
        RuleProfile::Adult => RuleSet {
            vocabulary: ADULT_VOCABULARY,
            rules: adult_rules(),
        },
        RuleProfile::Pediatric => {
            let mut rules = pediatric_base_rules();
            rules.extend(pediatric_eye_enhancement_rules());
            RuleSet {
                vocabulary: PEDIATRIC_VOCABULARY,
                rules,
            }
        }
        RuleProfile::PediatricLegacy => RuleSet {
            vocabulary: PEDIATRIC_VOCABULARY,
            rules: pediatric_base_rules(),
        },
    }
}

fn rule(
    target: Condition,
    points: i32,
    reason: &'static str,
    applies: fn(&SymptomObservation) -> bool,
) -> EvidenceRule {
    EvidenceRule {
        target,
        points,
        reason,
        applies,
    }
}

fn fever_at_least(obs: &SymptomObservation, band: FeverBand) -> bool {
    obs.fever_band() >= band
}

/// Diarrhea-predominant picture with no respiratory symptoms at all:
/// strong negative evidence for the respiratory candidates.
fn gi_without_respiratory(obs: &SymptomObservation) -> bool {
    obs.stool >= StoolFrequency::FourToSix && !obs.has_respiratory()
}

/// Prominent cough with zero loose stools: negative evidence for the
/// gastroenteritis family.
fn respiratory_without_gi(obs: &SymptomObservation) -> bool {
    obs.cough >= CoughLevel::Frequent && obs.stool == StoolFrequency::None
}

fn pediatric_base_rules() -> Vec<EvidenceRule> {
    vec![
        // Viral URI
        rule(Condition::ViralUri, 30, "clear or white nasal discharge", |o| {
            matches!(o.nasal, NasalDischarge::Clear | NasalDischarge::White)
        }),
        rule(Condition::ViralUri, 25, "cough present", |o| {
            o.cough >= CoughLevel::Occasional
        }),
        rule(Condition::ViralUri, 15, "low-grade fever", |o| {
            matches!(o.fever_band(), FeverBand::Low | FeverBand::Moderate)
        }),
        rule(
            Condition::ViralUri,
            15,
            "discolored nasal discharge (late viral phase)",
            |o| o.nasal == NasalDischarge::YellowGreen,
        ),
        rule(
            Condition::ViralUri,
            -40,
            "diarrhea without any respiratory symptom argues against",
            gi_without_respiratory,
        ),
        // Influenza-like
        rule(Condition::InfluenzaLike, 35, "high fever (38.5 °C or above)", |o| {
            fever_at_least(o, FeverBand::High)
        }),
        rule(Condition::InfluenzaLike, 20, "frequent or severe cough", |o| {
            o.cough >= CoughLevel::Frequent
        }),
        rule(Condition::InfluenzaLike, 15, "headache reported", |o| {
            o.migraine_headache
        }),
        rule(
            Condition::InfluenzaLike,
            -40,
            "diarrhea without any respiratory symptom argues against",
            gi_without_respiratory,
        ),
        // Rotavirus-like gastroenteritis
        rule(
            Condition::RotavirusGastroenteritis,
            40,
            "seven or more watery stools per day",
            |o| o.stool == StoolFrequency::SevenPlus,
        ),
        rule(
            Condition::RotavirusGastroenteritis,
            25,
            "four to six loose stools per day",
            |o| o.stool == StoolFrequency::FourToSix,
        ),
        rule(Condition::RotavirusGastroenteritis, 20, "persistent vomiting", |o| {
            o.persistent_vomiting
        }),
        rule(Condition::RotavirusGastroenteritis, 15, "fever with diarrhea", |o| {
            fever_at_least(o, FeverBand::Moderate) && o.stool > StoolFrequency::None
        }),
        rule(
            Condition::RotavirusGastroenteritis,
            15,
            "age 24 months or under",
            |o| o.age_at_most(24),
        ),
        rule(
            Condition::RotavirusGastroenteritis,
            -20,
            "bloody stool argues against simple viral gastroenteritis",
            |o| o.bloody_stool,
        ),
        rule(
            Condition::RotavirusGastroenteritis,
            -30,
            "prominent cough without diarrhea argues against",
            respiratory_without_gi,
        ),
        // Norovirus-like gastroenteritis
        rule(
            Condition::NorovirusGastroenteritis,
            35,
            "vomiting-predominant course",
            |o| o.persistent_vomiting,
        ),
        rule(
            Condition::NorovirusGastroenteritis,
            20,
            "four to six loose stools per day",
            |o| o.stool == StoolFrequency::FourToSix,
        ),
        rule(
            Condition::NorovirusGastroenteritis,
            15,
            "seven or more stools per day",
            |o| o.stool == StoolFrequency::SevenPlus,
        ),
        rule(
            Condition::NorovirusGastroenteritis,
            15,
            "little or no fever",
            |o| o.has_gi() && o.fever_band() <= FeverBand::Low,
        ),
        rule(Condition::NorovirusGastroenteritis, 10, "older than 24 months", |o| {
            o.age_months.is_some_and(|a| a > 24)
        }),
        rule(
            Condition::NorovirusGastroenteritis,
            -30,
            "prominent cough without diarrhea argues against",
            respiratory_without_gi,
        ),
        // Nonspecific viral gastroenteritis
        rule(
            Condition::ViralGastroenteritis,
            20,
            "four or more loose stools per day",
            |o| o.stool >= StoolFrequency::FourToSix,
        ),
        rule(Condition::ViralGastroenteritis, 15, "persistent vomiting", |o| {
            o.persistent_vomiting
        }),
        rule(Condition::ViralGastroenteritis, 15, "abdominal pain", |o| {
            o.abdominal_pain
        }),
        rule(
            Condition::ViralGastroenteritis,
            -30,
            "prominent cough without diarrhea argues against",
            respiratory_without_gi,
        ),
        // Adenoviral pharyngoconjunctival fever
        rule(
            Condition::AdenoviralPharyngoconjunctivitis,
            35,
            "eye discharge together with high fever",
            |o| o.has_eye() && fever_at_least(o, FeverBand::High),
        ),
        rule(
            Condition::AdenoviralPharyngoconjunctivitis,
            15,
            "respiratory symptoms alongside eye findings",
            |o| o.has_eye() && o.has_respiratory(),
        ),
        // Suspected bacterial otitis media
        rule(Condition::BacterialOtitisSuspected, 40, "ear pain", |o| o.ear_pain),
        rule(Condition::BacterialOtitisSuspected, 20, "fever with ear pain", |o| {
            o.ear_pain && fever_at_least(o, FeverBand::Moderate)
        }),
        rule(
            Condition::BacterialOtitisSuspected,
            15,
            "discolored nasal discharge",
            |o| o.nasal.is_discolored(),
        ),
        rule(
            Condition::BacterialOtitisSuspected,
            10,
            "symptoms worse at night",
            |o| o.nighttime_worsening,
        ),
        // Bacterial conjunctivitis
        rule(
            Condition::BacterialConjunctivitis,
            35,
            "purulent yellow eye discharge",
            |o| o.eye_discharge == EyeDischarge::PurulentYellow,
        ),
        rule(Condition::BacterialConjunctivitis, 20, "one eye affected", |o| {
            o.eye_laterality == EyeLaterality::Unilateral
        }),
        rule(
            Condition::BacterialConjunctivitis,
            -15,
            "itching suggests an allergic cause instead",
            |o| o.eye_discharge == EyeDischarge::Itchy,
        ),
        // Adenoviral conjunctivitis (base)
        rule(Condition::AdenoviralConjunctivitis, 15, "watery eye discharge", |o| {
            o.eye_discharge == EyeDischarge::Clear
        }),
        rule(
            Condition::AdenoviralConjunctivitis,
            20,
            "fever accompanying eye findings",
            |o| o.has_eye() && fever_at_least(o, FeverBand::Moderate),
        ),
        rule(
            Condition::AdenoviralConjunctivitis,
            15,
            "respiratory symptoms alongside eye findings",
            |o| o.has_eye() && o.has_respiratory(),
        ),
        // Allergic conjunctivitis
        rule(Condition::AllergicConjunctivitis, 35, "itchy eyes", |o| {
            o.eye_discharge == EyeDischarge::Itchy
        }),
        rule(Condition::AllergicConjunctivitis, 15, "both eyes affected", |o| {
            o.eye_laterality == EyeLaterality::Bilateral
        }),
        rule(Condition::AllergicConjunctivitis, 15, "watery eye discharge", |o| {
            o.eye_discharge == EyeDischarge::Clear
        }),
        rule(
            Condition::AllergicConjunctivitis,
            -20,
            "fever argues against an allergic cause",
            |o| o.fever_band().is_febrile(),
        ),
        // Bronchiolitis (RSV-like)
        rule(Condition::BronchiolitisRsvLike, 30, "wheeze present", |o| {
            o.wheeze > WheezeLevel::None
        }),
        rule(
            Condition::BronchiolitisRsvLike,
            20,
            "wheeze at 24 months or under",
            |o| o.wheeze > WheezeLevel::None && o.age_at_most(24),
        ),
        rule(Condition::BronchiolitisRsvLike, 15, "frequent or severe cough", |o| {
            o.cough >= CoughLevel::Frequent
        }),
        rule(
            Condition::BronchiolitisRsvLike,
            -40,
            "diarrhea without any respiratory symptom argues against",
            gi_without_respiratory,
        ),
        // Hand-foot-and-mouth
        rule(
            Condition::HandFootMouth,
            50,
            "hand, foot, or mouth lesions reported",
            |o| o.hand_foot_mouth,
        ),
        rule(Condition::HandFootMouth, 10, "fever with lesions", |o| {
            o.hand_foot_mouth && o.fever_band().is_febrile()
        }),
        rule(Condition::HandFootMouth, 10, "age 5 years or under", |o| {
            o.hand_foot_mouth && o.age_at_most(60)
        }),
    ]
}

/// The eye-enhanced additions that distinguish viral from bacterial
/// conjunctivitis by laterality.
fn pediatric_eye_enhancement_rules() -> Vec<EvidenceRule> {
    vec![
        rule(Condition::AdenoviralConjunctivitis, 25, "both eyes affected", |o| {
            o.eye_laterality == EyeLaterality::Bilateral
        }),
        rule(
            Condition::AdenoviralConjunctivitis,
            -20,
            "purulent discharge in one eye suggests a bacterial cause",
            |o| {
                o.eye_discharge == EyeDischarge::PurulentYellow
                    && o.eye_laterality == EyeLaterality::Unilateral
            },
        ),
        rule(
            Condition::BacterialConjunctivitis,
            -10,
            "both eyes affected leans viral",
            |o| o.eye_laterality == EyeLaterality::Bilateral,
        ),
        rule(
            Condition::AdenoviralPharyngoconjunctivitis,
            15,
            "both eyes affected",
            |o| o.has_eye() && o.eye_laterality == EyeLaterality::Bilateral,
        ),
    ]
}

fn adult_rules() -> Vec<EvidenceRule> {
    vec![
        // Viral URI
        rule(Condition::ViralUri, 25, "nasal discharge present", |o| {
            o.nasal != NasalDischarge::None
        }),
        rule(Condition::ViralUri, 20, "cough present", |o| {
            o.cough >= CoughLevel::Occasional
        }),
        rule(Condition::ViralUri, 10, "low-grade fever", |o| {
            matches!(o.fever_band(), FeverBand::Low | FeverBand::Moderate)
        }),
        rule(
            Condition::ViralUri,
            -40,
            "diarrhea without any respiratory symptom argues against",
            gi_without_respiratory,
        ),
        // Influenza-like
        rule(Condition::InfluenzaLike, 35, "high fever (38.5 °C or above)", |o| {
            fever_at_least(o, FeverBand::High)
        }),
        rule(Condition::InfluenzaLike, 15, "frequent or severe cough", |o| {
            o.cough >= CoughLevel::Frequent
        }),
        rule(Condition::InfluenzaLike, 15, "headache reported", |o| {
            o.migraine_headache
        }),
        rule(
            Condition::InfluenzaLike,
            -40,
            "diarrhea without any respiratory symptom argues against",
            gi_without_respiratory,
        ),
        // Viral gastroenteritis
        rule(
            Condition::ViralGastroenteritis,
            35,
            "four or more loose stools per day",
            |o| o.stool >= StoolFrequency::FourToSix,
        ),
        rule(Condition::ViralGastroenteritis, 20, "persistent vomiting", |o| {
            o.persistent_vomiting
        }),
        rule(Condition::ViralGastroenteritis, 10, "abdominal pain", |o| {
            o.abdominal_pain
        }),
        rule(
            Condition::ViralGastroenteritis,
            -30,
            "prominent cough without diarrhea argues against",
            respiratory_without_gi,
        ),
        // Suspected bacterial sinusitis
        rule(
            Condition::BacterialSinusitisSuspected,
            30,
            "purulent or discolored nasal discharge",
            |o| o.nasal.is_discolored(),
        ),
        rule(
            Condition::BacterialSinusitisSuspected,
            15,
            "fever with discolored discharge",
            |o| o.nasal.is_discolored() && fever_at_least(o, FeverBand::Moderate),
        ),
        rule(Condition::BacterialSinusitisSuspected, 10, "headache or facial pressure", |o| {
            o.migraine_headache
        }),
        // Allergic rhinitis
        rule(Condition::AllergicRhinitis, 20, "clear nasal discharge", |o| {
            o.nasal == NasalDischarge::Clear
        }),
        rule(Condition::AllergicRhinitis, 25, "itchy eyes", |o| {
            o.eye_discharge == EyeDischarge::Itchy
        }),
        rule(Condition::AllergicRhinitis, 15, "no fever", |o| {
            (o.nasal != NasalDischarge::None || o.has_eye()) && !o.fever_band().is_febrile()
        }),
        rule(Condition::AllergicRhinitis, 10, "hives elsewhere", |o| o.hives),
        // Migraine-like
        rule(Condition::MigraineLike, 40, "migraine-like headache", |o| {
            o.migraine_headache
        }),
        rule(Condition::MigraineLike, 15, "no fever", |o| {
            o.migraine_headache && !o.fever_band().is_febrile()
        }),
        rule(Condition::MigraineLike, 10, "nausea or vomiting with headache", |o| {
            o.migraine_headache && o.persistent_vomiting
        }),
        // Bacterial conjunctivitis
        rule(
            Condition::BacterialConjunctivitis,
            35,
            "purulent yellow eye discharge",
            |o| o.eye_discharge == EyeDischarge::PurulentYellow,
        ),
        rule(Condition::BacterialConjunctivitis, 20, "one eye affected", |o| {
            o.eye_laterality == EyeLaterality::Unilateral
        }),
        rule(
            Condition::BacterialConjunctivitis,
            -15,
            "itching suggests an allergic cause instead",
            |o| o.eye_discharge == EyeDischarge::Itchy,
        ),
        // Allergic conjunctivitis
        rule(Condition::AllergicConjunctivitis, 35, "itchy eyes", |o| {
            o.eye_discharge == EyeDischarge::Itchy
        }),
        rule(Condition::AllergicConjunctivitis, 15, "both eyes affected", |o| {
            o.eye_laterality == EyeLaterality::Bilateral
        }),
        rule(
            Condition::AllergicConjunctivitis,
            10,
            "no fever",
            |o| o.has_eye() && !o.fever_band().is_febrile(),
        ),
    ]
}
