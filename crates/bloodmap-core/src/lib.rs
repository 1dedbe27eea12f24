//! BloodMap Core Library
//!
//! Symptom scoring, triage, and antipyretic dose safety for caregivers of
//! pediatric and oncology patients. The whole core is synchronous,
//! side-effect-free pure computation: the UI, persistence, and export
//! layers live elsewhere and only exchange plain data with it.
//!
//! # Architecture
//!
//! ```text
//! caregiver symptom inputs ──► SymptomScorer ──► ranked ConditionCandidates
//!        (UI layer)                 │
//!                                   └─ top score ─┐
//!                                                 ▼
//!      temp / age / red flags ──────────────► triage() ──► TriageResult
//!
//! weight / age / dose log ──► DoseGuard ──► DoseRecommendation
//!        (UI layer)            recommend()    (dose + blocks + warnings)
//! ```
//!
//! # Core Principles
//!
//! - **Never raise.** Malformed input coerces to a safe absent value; hard
//!   safety stops come back as [`models::BlockReason`] data, not errors.
//! - **Time is injected.** Every time-dependent operation takes `now`
//!   explicitly, so evaluation is deterministic and testable.
//! - **The dose log is read-only.** DoseGuard only reads the caller's
//!   append-only history to compute eligibility.
//!
//! # Modules
//!
//! - [`bands`]: fever bands and lab reference-range classification
//! - [`models`]: domain types (SymptomObservation, DoseLogEntry, etc.)
//! - [`scorer`]: weighted-evidence differential scoring
//! - [`dose`]: dose calculation with cooldown/ceiling/lab safety checks
//! - [`triage`]: first-match-wins severity tiering
//! - [`drugs`]: drug name → typed enum alias resolution

pub mod bands;
pub mod dose;
pub mod drugs;
pub mod models;
pub mod scorer;
pub mod triage;

// Re-export commonly used types
pub use bands::{AncBand, FeverBand, RangeFlag};
pub use dose::{recommend, Biometrics, DoseConfig, DrugDoseParams};
pub use drugs::{resolve_drug, DrugResolveError};
pub use models::{
    BlockReason, Condition, ConditionCandidate, DoseLogEntry, DoseRecommendation, DoseWarning,
    Drug, LabSnapshot, RedFlagSet, SymptomObservation, TriageLevel, TriageResult,
};
pub use scorer::{score, RuleProfile};
pub use triage::triage;
