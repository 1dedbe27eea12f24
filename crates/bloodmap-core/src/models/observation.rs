//! Symptom observation models.
//!
//! Every categorical field is a closed enum with a lenient `from_input`
//! parser: unknown or empty strings map to the absent variant, never an
//! error. Caregiver-entered data is messy by nature.

use serde::{Deserialize, Serialize};

use crate::bands::FeverBand;

/// Nasal discharge character.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NasalDischarge {
    #[default]
    None,
    Clear,
    White,
    YellowGreen,
    Purulent,
    BloodTinged,
}

impl NasalDischarge {
    /// Parse a caregiver-entered value. Unknown input maps to `None`.
    pub fn from_input(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "clear" => Self::Clear,
            "white" => Self::White,
            "yellow-green" | "yellow green" | "yellowgreen" | "yellow" | "green" => {
                Self::YellowGreen
            }
            "purulent" | "pus" => Self::Purulent,
            "blood-tinged" | "blood tinged" | "bloody" => Self::BloodTinged,
            _ => Self::None,
        }
    }

    /// True for the discolored variants that suggest a later or bacterial phase.
    pub fn is_discolored(&self) -> bool {
        matches!(self, Self::YellowGreen | Self::Purulent | Self::BloodTinged)
    }
}

/// Cough severity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum CoughLevel {
    #[default]
    None,
    Occasional,
    Frequent,
    Severe,
}

impl CoughLevel {
    pub fn from_input(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "occasional" | "mild" => Self::Occasional,
            "frequent" | "moderate" => Self::Frequent,
            "severe" | "constant" => Self::Severe,
            _ => Self::None,
        }
    }
}

/// Loose stools per day, banded.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum StoolFrequency {
    #[default]
    None,
    OneToThree,
    FourToSix,
    SevenPlus,
}

impl StoolFrequency {
    pub fn from_input(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "1-3" | "1~3" | "few" => Self::OneToThree,
            "4-6" | "4~6" | "several" => Self::FourToSix,
            "7+" | "7" | "many" => Self::SevenPlus,
            _ => Self::None,
        }
    }

    /// Band a raw daily count.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::None,
            1..=3 => Self::OneToThree,
            4..=6 => Self::FourToSix,
            _ => Self::SevenPlus,
        }
    }
}

/// Eye discharge character.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EyeDischarge {
    #[default]
    None,
    Clear,
    PurulentYellow,
    Itchy,
}

impl EyeDischarge {
    pub fn from_input(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "clear" | "watery" => Self::Clear,
            "purulent-yellow" | "purulent yellow" | "purulent" | "yellow" => Self::PurulentYellow,
            "itchy" => Self::Itchy,
            _ => Self::None,
        }
    }
}

/// Which eye(s) are affected.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EyeLaterality {
    #[default]
    Unknown,
    Unilateral,
    Bilateral,
}

impl EyeLaterality {
    pub fn from_input(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "unilateral" | "one" | "one eye" => Self::Unilateral,
            "bilateral" | "both" | "both eyes" => Self::Bilateral,
            _ => Self::Unknown,
        }
    }
}

/// Wheeze audibility.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum WheezeLevel {
    #[default]
    None,
    Mild,
    Marked,
}

impl WheezeLevel {
    pub fn from_input(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "mild" | "slight" => Self::Mild,
            "marked" | "severe" | "loud" => Self::Marked,
            _ => Self::None,
        }
    }
}

/// Sputum production.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum SputumLevel {
    #[default]
    None,
    Scant,
    Copious,
}

impl SputumLevel {
    pub fn from_input(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "scant" | "some" => Self::Scant,
            "copious" | "lots" | "heavy" => Self::Copious,
            _ => Self::None,
        }
    }
}

/// One caregiver-entered symptom observation plus its context.
///
/// Immutable per evaluation; the scorer and triage aggregator only read it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SymptomObservation {
    // Categorical symptoms
    pub nasal: NasalDischarge,
    pub cough: CoughLevel,
    pub stool: StoolFrequency,
    pub eye_discharge: EyeDischarge,
    pub eye_laterality: EyeLaterality,
    pub wheeze: WheezeLevel,
    pub sputum: SputumLevel,

    // Boolean flags
    pub persistent_vomiting: bool,
    pub oliguria: bool,
    pub petechiae: bool,
    pub abdominal_pain: bool,
    pub ear_pain: bool,
    pub rash: bool,
    pub hives: bool,
    pub migraine_headache: bool,
    pub hand_foot_mouth: bool,
    pub seizure: bool,
    pub bloody_stool: bool,
    pub nighttime_worsening: bool,
    pub dehydration_signs: bool,

    // Context
    /// Age in months. `None` when unknown.
    pub age_months: Option<u32>,
    /// Current temperature in °C.
    pub temp_c: Option<f64>,
    /// Highest temperature observed this illness, °C.
    pub max_temp_c: Option<f64>,
    /// Comorbidity tags (free strings, read-only context).
    pub comorbidities: Vec<String>,
    /// Heart rate, beats per minute.
    pub heart_rate: Option<u32>,
}

/// Plausible clinical thermometer range; readings outside it are ignored.
const TEMP_VALID_RANGE: (f64, f64) = (30.0, 45.0);

impl SymptomObservation {
    /// The temperature used for scoring: the higher of current and max,
    /// with implausible readings discarded.
    pub fn effective_temp(&self) -> Option<f64> {
        let valid = |t: &f64| t.is_finite() && *t >= TEMP_VALID_RANGE.0 && *t <= TEMP_VALID_RANGE.1;
        let current = self.temp_c.filter(valid);
        let max = self.max_temp_c.filter(valid);
        match (current, max) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }

    /// Fever band derived from the effective temperature.
    pub fn fever_band(&self) -> FeverBand {
        FeverBand::from_temp(self.effective_temp())
    }

    /// Any respiratory symptom present (cough, nasal discharge, wheeze, sputum).
    pub fn has_respiratory(&self) -> bool {
        self.cough > CoughLevel::None
            || self.nasal != NasalDischarge::None
            || self.wheeze > WheezeLevel::None
            || self.sputum > SputumLevel::None
    }

    /// Any gastrointestinal symptom present.
    pub fn has_gi(&self) -> bool {
        self.stool > StoolFrequency::None
            || self.persistent_vomiting
            || self.abdominal_pain
            || self.bloody_stool
    }

    /// Any eye symptom present.
    pub fn has_eye(&self) -> bool {
        self.eye_discharge != EyeDischarge::None || self.eye_laterality != EyeLaterality::Unknown
    }

    /// True when age is known and at or below `months`.
    pub fn age_at_most(&self, months: u32) -> bool {
        self.age_months.is_some_and(|a| a <= months)
    }
}
