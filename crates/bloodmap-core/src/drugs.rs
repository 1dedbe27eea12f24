//! Drug name resolution.
//!
//! Maps caregiver- or importer-supplied drug names onto the typed [`Drug`]
//! enum: deterministic normalization, a closed alias table, then substring
//! and fuzzy fallbacks for misspellings.

use strsim::{jaro_winkler, normalized_levenshtein};
use thiserror::Error;

use crate::models::Drug;

/// Alias table in fixed declaration order. First match wins, which keeps
/// resolution deterministic without a hash map.
const ALIASES: &[(&str, Drug)] = &[
    ("APAP", Drug::Apap),
    ("ACETAMINOPHEN", Drug::Apap),
    ("PARACETAMOL", Drug::Apap),
    ("TYLENOL", Drug::Apap),
    ("SETOPEN", Drug::Apap),
    ("CHAMP", Drug::Apap),
    ("TEMPRA", Drug::Apap),
    ("IBU", Drug::Ibu),
    ("IBUPROFEN", Drug::Ibu),
    ("BRUFEN", Drug::Ibu),
    ("ADVIL", Drug::Ibu),
    ("MOTRIN", Drug::Ibu),
    ("CAROL", Drug::Ibu),
];

/// Minimum fuzzy similarity to accept a match.
const FUZZY_THRESHOLD: f64 = 0.85;

/// Minimum normalized length before substring matching applies; shorter
/// fragments match too promiscuously.
const SUBSTRING_MIN_LEN: usize = 4;

/// Resolution errors.
#[derive(Error, Debug, PartialEq)]
pub enum DrugResolveError {
    #[error("unrecognized drug name: {0}")]
    Unknown(String),
}

/// Resolve a free-form drug name to the typed enum.
///
/// Order: exact alias match on the normalized name, then substring match
/// (either direction), then fuzzy similarity above [`FUZZY_THRESHOLD`].
pub fn resolve_drug(name: &str) -> Result<Drug, DrugResolveError> {
    let normalized = normalize_drug_name(name);
    if normalized.is_empty() {
        return Err(DrugResolveError::Unknown(name.to_string()));
    }

    for (alias, drug) in ALIASES {
        if normalized == *alias {
            return Ok(*drug);
        }
    }

    // Substring fallback: "tylenol syrup 160" or a truncated "acetamin".
    if normalized.len() >= SUBSTRING_MIN_LEN {
        for (alias, drug) in ALIASES {
            if normalized.contains(alias)
                || (alias.len() >= SUBSTRING_MIN_LEN && alias.contains(normalized.as_str()))
            {
                return Ok(*drug);
            }
        }
    }

    // Fuzzy fallback for misspellings.
    let mut best: Option<(f64, Drug)> = None;
    for (alias, drug) in ALIASES {
        let similarity = fuzzy_match(&normalized, alias);
        if similarity >= FUZZY_THRESHOLD && best.map_or(true, |(s, _)| similarity > s) {
            best = Some((similarity, *drug));
        }
    }
    if let Some((_, drug)) = best {
        return Ok(drug);
    }

    Err(DrugResolveError::Unknown(name.to_string()))
}

/// Canonical form: uppercase alphanumerics only.
pub fn normalize_drug_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Combined fuzzy similarity. Jaro-Winkler is weighted more heavily as it
/// favors shared prefixes, which drug names usually keep through typos.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);
    jw * 0.6 + lev * 0.4
}
