//! Triage models: red flags and the three-tier result.

use serde::{Deserialize, Serialize};

/// Boolean clinical warning signs the caregiver reports directly.
///
/// Hard flags force the urgent tier on their own; soft flags only escalate
/// in combination.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedFlagSet {
    // Hard flags
    pub seizure: bool,
    /// High-volume bloody or black stool.
    pub bloody_stool: bool,
    pub severe_dehydration: bool,
    // Soft flags
    pub persistent_vomiting: bool,
    pub oliguria: bool,
    pub petechiae: bool,
}

impl RedFlagSet {
    /// No flags set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Any flag that forces the urgent tier on its own.
    pub fn any_hard(&self) -> bool {
        self.seizure || self.bloody_stool || self.severe_dehydration
    }

    /// Number of soft flags present.
    pub fn soft_count(&self) -> usize {
        [self.persistent_vomiting, self.oliguria, self.petechiae]
            .iter()
            .filter(|f| **f)
            .count()
    }
}

/// Coarse severity tier, distinct from the candidate scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum TriageLevel {
    Stable,
    Caution,
    Urgent,
}

/// Triage outcome: the tier plus a caregiver-facing advisory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriageResult {
    pub level: TriageLevel,
    pub advisory: String,
}
