//! Dosing models: the drug identity, the caller-owned dose log, and the
//! structured recommendation DoseGuard returns.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Antipyretic identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Drug {
    /// Acetaminophen / paracetamol.
    Apap,
    /// Ibuprofen.
    Ibu,
}

impl Drug {
    pub fn label(&self) -> &'static str {
        match self {
            Drug::Apap => "acetaminophen",
            Drug::Ibu => "ibuprofen",
        }
    }
}

/// One administered dose, as recorded by the caller.
///
/// The log is append-only from the core's perspective: DoseGuard only reads
/// it. Timestamps arrive as RFC 3339 strings from the persistence layer and
/// are parsed defensively; an unparsable entry is skipped, never fatal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoseLogEntry {
    /// Stable entry id, generated at record time.
    pub entry_id: String,
    pub drug: Drug,
    /// Administered dose in mg.
    pub dose_mg: f64,
    /// Administration time, RFC 3339 with offset.
    pub given_at: String,
}

impl DoseLogEntry {
    /// Create a log entry for a dose given at `given_at`.
    pub fn new(drug: Drug, dose_mg: f64, given_at: DateTime<FixedOffset>) -> Self {
        Self {
            entry_id: uuid::Uuid::new_v4().to_string(),
            drug,
            dose_mg,
            given_at: given_at.to_rfc3339(),
        }
    }

    /// Parse the stored timestamp. `None` for malformed entries.
    pub fn given_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.given_at.trim()).ok()
    }
}

/// A hard safety stop. Returned as data; the caller decides whether to
/// prevent the record-dose action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum BlockReason {
    /// Minimum interval since the last same-drug dose has not elapsed.
    CooldownNotElapsed {
        next_eligible_at: DateTime<FixedOffset>,
    },
    /// Adding this dose would exceed the rolling 24 h ceiling.
    DailyCeilingExceeded { total_24h_mg: f64, ceiling_mg: f64 },
    /// Ibuprofen is contraindicated under 6 months of age.
    UnderSixMonths,
    /// Platelets below the bleeding-risk threshold block NSAIDs.
    LowPlatelets { platelets_k: f64 },
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockReason::CooldownNotElapsed { next_eligible_at } => {
                write!(f, "minimum dosing interval not elapsed; next dose at {}", next_eligible_at.to_rfc3339())
            }
            BlockReason::DailyCeilingExceeded { total_24h_mg, ceiling_mg } => {
                write!(f, "24h total {total_24h_mg:.0} mg would exceed the {ceiling_mg:.0} mg ceiling")
            }
            BlockReason::UnderSixMonths => {
                write!(f, "ibuprofen is contraindicated under 6 months of age")
            }
            BlockReason::LowPlatelets { platelets_k } => {
                write!(f, "platelets {platelets_k:.0}k/µL: NSAID bleeding risk")
            }
        }
    }
}

/// A soft caution. Advisory only, never blocks on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DoseWarning {
    /// No weight supplied; dose computed from an age-based estimate.
    EstimatedWeight { estimated_kg: f64 },
    /// Reduced renal function: caution with ibuprofen.
    RenalCaution {
        egfr: Option<f64>,
        creatinine: Option<f64>,
    },
    /// Transaminases well above normal: caution with acetaminophen.
    HepaticCaution { ast: Option<f64>, alt: Option<f64> },
}

impl fmt::Display for DoseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoseWarning::EstimatedWeight { estimated_kg } => {
                write!(f, "weight estimated from age ({estimated_kg:.1} kg); confirm actual weight")
            }
            DoseWarning::RenalCaution { .. } => {
                write!(f, "reduced renal function: use ibuprofen with caution")
            }
            DoseWarning::HepaticCaution { .. } => {
                write!(f, "elevated liver enzymes: use acetaminophen with caution")
            }
        }
    }
}

/// The full DoseGuard output. The computed recommendation is always present,
/// even when blocked, so the caller can display "would be X mg, but blocked
/// because Y".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoseRecommendation {
    pub drug: Drug,
    /// Recommended single dose in mg.
    pub dose_mg: f64,
    /// Same dose as syrup volume, given the configured concentration.
    pub dose_ml: f64,
    /// Weight the calculation used.
    pub weight_kg_used: f64,
    /// True when the weight came from the age-based estimate.
    pub weight_estimated: bool,
    /// Earliest time the next dose of this drug is eligible. `None` when no
    /// prior dose constrains it.
    pub next_eligible_at: Option<DateTime<FixedOffset>>,
    /// Same-drug total over the trailing 24 h, mg.
    pub total_24h_mg: f64,
    /// The 24 h cumulative ceiling in effect, mg.
    pub ceiling_24h_mg: f64,
    pub blocks: Vec<BlockReason>,
    pub warnings: Vec<DoseWarning>,
}

impl DoseRecommendation {
    /// True when any hard safety rule fired.
    pub fn is_blocked(&self) -> bool {
        !self.blocks.is_empty()
    }
}
