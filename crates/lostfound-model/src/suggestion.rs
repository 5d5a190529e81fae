//! Result shapes returned by territorial lookups.

use serde::{Deserialize, Serialize};

use crate::territory::{CountyKind, UnitKind};

/// One auto-complete entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: UnitKind,
    /// Canonical name of the suggested unit.
    pub name: String,
    pub full_name: String,
    /// Enclosing county (municipality suggestions only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    /// County flavour (county suggestions only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_kind: Option<CountyKind>,
    pub voivodeship: String,
    /// Human-readable label, e.g. `wieliczka, pow. wielicki, woj. malopolskie`.
    pub label: String,
}

/// Resolution outcome for one level of a location triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUnit {
    /// Value as supplied by the caller.
    pub input: String,
    /// Canonical name when resolved.
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub code: Option<String>,
    /// County flavour or municipality flavour, when applicable.
    pub kind: Option<String>,
    /// Seat of the voivode (voivodeship level only).
    pub capital: Option<String>,
    pub valid: bool,
}

impl ResolvedUnit {
    /// Entry for an input that did not resolve.
    pub fn unresolved(input: &str) -> Self {
        Self {
            input: input.to_string(),
            name: None,
            full_name: None,
            code: None,
            kind: None,
            capital: None,
            valid: false,
        }
    }
}

/// Full resolution of a municipality / county / voivodeship triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub municipality: ResolvedUnit,
    pub county: ResolvedUnit,
    pub voivodeship: ResolvedUnit,
}

impl LocationInfo {
    /// True when all three levels resolved.
    pub fn is_valid(&self) -> bool {
        self.municipality.valid && self.county.valid && self.voivodeship.valid
    }
}
