//! Tests for lostfound-model types.

use lostfound_model::{ItemCategory, ItemRecord, LocationInfo, ResolvedUnit, fields};
use serde_json::json;

#[test]
fn record_deserializes_database_row() {
    let row = json!({
        "public_id": "BRZ/2024/0001",
        "item_name": "telefon samsung",
        "category": "phone",
        "date_found": "2024-05-09",
        "voivodeship": "malopolskie",
        "custom_fields": "{\"brand\":\"samsung\",\"imei\":\"356938035643809\"}",
        "estimated_value": 450.0
    });
    let record: ItemRecord = serde_json::from_value(row).expect("deserialize row");

    assert_eq!(record.field(fields::ITEM_NAME), Some("telefon samsung"));
    assert_eq!(record.field("public_id"), Some("BRZ/2024/0001"));
    assert_eq!(record.custom_field("imei").as_deref(), Some("356938035643809"));
    let category: ItemCategory = record
        .field("category")
        .expect("category present")
        .parse()
        .expect("known category");
    assert_eq!(category, ItemCategory::Phone);
}

#[test]
fn location_info_requires_all_levels() {
    let resolved = |input: &str| ResolvedUnit {
        name: Some(input.to_lowercase()),
        valid: true,
        ..ResolvedUnit::unresolved(input)
    };
    let mut info = LocationInfo {
        municipality: resolved("Wieliczka"),
        county: resolved("wielicki"),
        voivodeship: resolved("malopolskie"),
    };
    assert!(info.is_valid());

    info.county = ResolvedUnit::unresolved("nieznany");
    assert!(!info.is_valid());
}
