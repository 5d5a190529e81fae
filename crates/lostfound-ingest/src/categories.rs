//! Category and status labels to stored codes.

use lostfound_model::{ItemCategory, ItemStatus};

const CATEGORY_LABELS: &[(&str, ItemCategory)] = &[
    ("telefon", ItemCategory::Phone),
    ("komórka", ItemCategory::Phone),
    ("dokumenty", ItemCategory::Documents),
    ("dokument", ItemCategory::Documents),
    ("bizuteria", ItemCategory::Jewelry),
    ("biżuteria", ItemCategory::Jewelry),
    ("zegarek", ItemCategory::Jewelry),
    ("klucze", ItemCategory::Keys),
    ("portfel", ItemCategory::Wallet),
    ("odziez", ItemCategory::Clothing),
    ("odzież", ItemCategory::Clothing),
    ("elektronika", ItemCategory::Electronics),
    ("rower", ItemCategory::Bicycle),
    ("inne", ItemCategory::Other),
];

const STATUS_LABELS: &[(&str, ItemStatus)] = &[
    ("przechowywany", ItemStatus::Stored),
    ("oczekuje", ItemStatus::Stored),
    ("zwrocony", ItemStatus::Returned),
    ("zwrócony", ItemStatus::Returned),
    ("zwrocony wlascicielowi", ItemStatus::Returned),
    ("zwrócony właścicielowi", ItemStatus::Returned),
    ("odebrane", ItemStatus::Returned),
    ("zlikwidowany", ItemStatus::Liquidated),
    ("przekazane", ItemStatus::Liquidated),
];

/// Category for a Polish label or English code, if known.
pub fn lookup_category(value: &str) -> Option<ItemCategory> {
    let label = value.trim().to_lowercase();
    if let Ok(category) = label.parse::<ItemCategory>() {
        return Some(category);
    }
    CATEGORY_LABELS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, category)| *category)
}

/// Category code for a label; unknown labels map to `other`.
pub fn map_category(value: &str) -> ItemCategory {
    lookup_category(value).unwrap_or_default()
}

/// Status for a Polish label or English code, if known.
pub fn lookup_status(value: &str) -> Option<ItemStatus> {
    let label = value.trim().to_lowercase();
    if let Ok(status) = label.parse::<ItemStatus>() {
        return Some(status);
    }
    STATUS_LABELS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, status)| *status)
}

/// Status code for a label; unknown labels map to `stored`.
pub fn map_status(value: &str) -> ItemStatus {
    lookup_status(value).unwrap_or_default()
}
