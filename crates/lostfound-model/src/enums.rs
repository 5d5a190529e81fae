//! Item category and storage status codes.
//!
//! Codes are the lowercase English identifiers stored with each record;
//! the Polish labels are what the public open-data export shows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Phone,
    Documents,
    Jewelry,
    Keys,
    Wallet,
    Clothing,
    Electronics,
    Bicycle,
    #[default]
    Other,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 9] = [
        ItemCategory::Phone,
        ItemCategory::Documents,
        ItemCategory::Jewelry,
        ItemCategory::Keys,
        ItemCategory::Wallet,
        ItemCategory::Clothing,
        ItemCategory::Electronics,
        ItemCategory::Bicycle,
        ItemCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Phone => "phone",
            ItemCategory::Documents => "documents",
            ItemCategory::Jewelry => "jewelry",
            ItemCategory::Keys => "keys",
            ItemCategory::Wallet => "wallet",
            ItemCategory::Clothing => "clothing",
            ItemCategory::Electronics => "electronics",
            ItemCategory::Bicycle => "bicycle",
            ItemCategory::Other => "other",
        }
    }

    /// Polish label used in exports.
    pub fn label_pl(&self) -> &'static str {
        match self {
            ItemCategory::Phone => "Telefon",
            ItemCategory::Documents => "Dokumenty",
            ItemCategory::Jewelry => "Biżuteria",
            ItemCategory::Keys => "Klucze",
            ItemCategory::Wallet => "Portfel",
            ItemCategory::Clothing => "Odzież",
            ItemCategory::Electronics => "Elektronika",
            ItemCategory::Bicycle => "Rower",
            ItemCategory::Other => "Inne",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = ModelError;

    /// Parses a stored category code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        ItemCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == code)
            .ok_or_else(|| ModelError::unknown("item category", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Held by the office, waiting for the owner.
    #[default]
    Stored,
    /// Handed back to the owner.
    Returned,
    /// Storage period ran out; the item was sold, transferred or destroyed.
    Liquidated,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [
        ItemStatus::Stored,
        ItemStatus::Returned,
        ItemStatus::Liquidated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Stored => "stored",
            ItemStatus::Returned => "returned",
            ItemStatus::Liquidated => "liquidated",
        }
    }

    pub fn label_pl(&self) -> &'static str {
        match self {
            ItemStatus::Stored => "Przechowywany",
            ItemStatus::Returned => "Zwrócony",
            ItemStatus::Liquidated => "Zlikwidowany",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        ItemStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == code)
            .ok_or_else(|| ModelError::unknown("item status", s))
    }
}
