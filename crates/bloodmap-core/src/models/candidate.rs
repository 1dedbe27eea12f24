//! Condition candidate vocabulary and scorer output.

use serde::{Deserialize, Serialize};

/// The closed vocabulary of condition candidates across both rule profiles.
///
/// Each profile scores an ordered subset of these; that declaration order is
/// the tie-break for equal scores, so it is part of the contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    // Shared / pediatric
    ViralUri,
    InfluenzaLike,
    RotavirusGastroenteritis,
    NorovirusGastroenteritis,
    ViralGastroenteritis,
    AdenoviralPharyngoconjunctivitis,
    BacterialOtitisSuspected,
    BacterialConjunctivitis,
    AdenoviralConjunctivitis,
    AllergicConjunctivitis,
    BronchiolitisRsvLike,
    HandFootMouth,
    // Adult-only
    BacterialSinusitisSuspected,
    AllergicRhinitis,
    MigraineLike,
}

impl Condition {
    /// Human-readable label for caregiver display.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::ViralUri => "viral upper respiratory infection",
            Condition::InfluenzaLike => "influenza-like illness",
            Condition::RotavirusGastroenteritis => "viral gastroenteritis (rotavirus-like)",
            Condition::NorovirusGastroenteritis => "viral gastroenteritis (norovirus-like)",
            Condition::ViralGastroenteritis => "nonspecific viral gastroenteritis",
            Condition::AdenoviralPharyngoconjunctivitis => "adenoviral pharyngoconjunctival fever",
            Condition::BacterialOtitisSuspected => "suspected bacterial otitis media",
            Condition::BacterialConjunctivitis => "bacterial conjunctivitis",
            Condition::AdenoviralConjunctivitis => "adenoviral conjunctivitis",
            Condition::AllergicConjunctivitis => "allergic conjunctivitis",
            Condition::BronchiolitisRsvLike => "bronchiolitis (RSV-like)",
            Condition::HandFootMouth => "hand-foot-and-mouth disease",
            Condition::BacterialSinusitisSuspected => "suspected bacterial sinusitis",
            Condition::AllergicRhinitis => "allergic rhinitis",
            Condition::MigraineLike => "migraine-like headache",
        }
    }

    /// True for the respiratory-tract candidates, used by the
    /// mutual-exclusivity heuristics.
    pub fn is_respiratory(&self) -> bool {
        matches!(
            self,
            Condition::ViralUri
                | Condition::InfluenzaLike
                | Condition::BronchiolitisRsvLike
                | Condition::BacterialSinusitisSuspected
        )
    }

    /// True for the gastroenteritis-family candidates.
    pub fn is_gastroenteritis(&self) -> bool {
        matches!(
            self,
            Condition::RotavirusGastroenteritis
                | Condition::NorovirusGastroenteritis
                | Condition::ViralGastroenteritis
        )
    }
}

/// One ranked differential candidate with its supporting evidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionCandidate {
    pub condition: Condition,
    /// Accumulated evidence score, clamped to [0, 100].
    pub score: i32,
    /// Human-readable reasons for the rules that fired, in firing order.
    pub reasons: Vec<String>,
}

impl ConditionCandidate {
    pub fn label(&self) -> &'static str {
        self.condition.label()
    }
}
