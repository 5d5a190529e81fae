//! End-to-end standardization of item records.

use std::sync::Arc;

use chrono::NaiveDate;
use lostfound_model::{County, CountyKind, ItemRecord, Municipality, MunicipalityKind, Voivodeship, fields};
use lostfound_normalization::{ReferenceTables, StandardizeOptions, Standardizer};
use lostfound_teryt::TerytDirectory;
use serde_json::{Value, json};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).expect("date")
}

fn with_teryt() -> Standardizer {
    let teryt = TerytDirectory::builtin().expect("builtin TERYT");
    Standardizer::new(
        &ReferenceTables::default(),
        Some(Arc::new(teryt)),
        StandardizeOptions::new().with_today(today()),
    )
    .expect("standardizer")
}

fn degraded() -> Standardizer {
    Standardizer::new(
        &ReferenceTables::default(),
        None,
        StandardizeOptions::new().with_today(today()),
    )
    .expect("standardizer")
}

fn record(raw: Value) -> ItemRecord {
    serde_json::from_value(raw).expect("record")
}

#[test]
fn item_name_gets_spelling_and_capitals() {
    let out = with_teryt().standardize(&ItemRecord::new().with(fields::ITEM_NAME, "telfon samsung"));
    assert_eq!(out.item_name.as_deref(), Some("Telefon Samsung"));
}

#[test]
fn voivodeship_with_diacritics_is_canonicalized() {
    let out = with_teryt().standardize(&ItemRecord::new().with(fields::VOIVODESHIP, "śląskie"));
    assert_eq!(out.voivodeship.as_deref(), Some("slaskie"));
}

#[test]
fn relative_date_uses_configured_today() {
    let out = with_teryt().standardize(&ItemRecord::new().with(fields::DATE_FOUND, "wczoraj"));
    assert_eq!(out.date_found.as_deref(), Some("2024-05-09"));
}

#[test]
fn street_prefix_is_normalized() {
    let out = with_teryt().standardize(&ItemRecord::new().with(fields::LOCATION_FOUND, "ulica Długa 5"));
    assert_eq!(out.location_found.as_deref(), Some("Ul. Długa 5"));
}

#[test]
fn brand_alias_in_custom_fields() {
    let out = with_teryt().standardize(&record(json!({ "custom_fields": { "brand": "vw" } })));
    assert_eq!(out.custom_field("brand").as_deref(), Some("Volkswagen"));
}

#[test]
fn unknown_municipality_is_only_capitalized() {
    let standardizer = with_teryt();
    let out = standardizer.standardize(&ItemRecord::new().with(fields::MUNICIPALITY, "Nieistniejąca Wieś"));
    assert_eq!(out.municipality.as_deref(), Some("Nieistniejąca Wieś"));

    let out = standardizer.standardize(&ItemRecord::new().with(fields::MUNICIPALITY, "nieistniejąca wieś"));
    assert_eq!(out.municipality.as_deref(), Some("Nieistniejąca Wieś"));
}

#[test]
fn territory_resolves_top_down() {
    let out = with_teryt().standardize(&record(json!({
        "voivodeship": "Małopolskie",
        "county": "Kraków",
        "municipality": "Kraków",
    })));
    assert_eq!(out.voivodeship.as_deref(), Some("malopolskie"));
    assert_eq!(out.county.as_deref(), Some("krakow"));
    assert_eq!(out.municipality.as_deref(), Some("krakow"));
}

#[test]
fn parent_context_picks_the_right_county() {
    let out = with_teryt().standardize(&record(json!({
        "voivodeship": "wielkopolskie",
        "county": "Grodziski",
        "municipality": "Grodzisk Wlkp",
    })));
    assert_eq!(out.county.as_deref(), Some("grodziski"));
    // Only wielkopolskie's grodziski county is searched; the abbreviation
    // does not resolve, so the input is title cased.
    assert_eq!(out.municipality.as_deref(), Some("Grodzisk Wlkp"));

    let out = with_teryt().standardize(&record(json!({
        "voivodeship": "wielkopolskie",
        "county": "grodziski",
        "municipality": "grodzisk",
    })));
    assert_eq!(out.municipality.as_deref(), Some("grodzisk-wielkopolski"));
}

#[test]
fn unresolved_voivodeship_does_not_backtrack() {
    let out = with_teryt().standardize(&record(json!({
        "voivodeship": "Wielkopolska",
        "county": "grodziski",
    })));
    assert_eq!(out.voivodeship.as_deref(), Some("Wielkopolska"));
    assert_eq!(out.county.as_deref(), Some("Grodziski"));
}

#[test]
fn degraded_mode_uses_aliases_and_capitals() {
    let out = degraded().standardize(&record(json!({
        "voivodeship": "Śląskie",
        "county": "bielski",
        "municipality": "szczyrk",
    })));
    assert_eq!(out.voivodeship.as_deref(), Some("slaskie"));
    assert_eq!(out.county.as_deref(), Some("Bielski"));
    assert_eq!(out.municipality.as_deref(), Some("Szczyrk"));
}

#[test]
fn unknown_fields_pass_through() {
    let input = record(json!({
        "item_name": "czrny portfel",
        "category": "wallet",
        "status": "stored",
        "estimated_value": 120.5,
        "lost_and_found_office": { "name": "Biuro Rzeczy Znalezionych w Krakowie" },
        "custom_fields": { "color": "czrny", "pattern": "krata", "serial": 42 }
    }));
    let out = with_teryt().standardize(&input);

    assert_eq!(out.other, input.other);
    insta::assert_json_snapshot!(out, @r#"
    {
      "item_name": "Czarny Portfel",
      "custom_fields": {
        "color": "Czarny",
        "pattern": "krata",
        "serial": 42
      },
      "category": "wallet",
      "estimated_value": 120.5,
      "lost_and_found_office": {
        "name": "Biuro Rzeczy Znalezionych w Krakowie"
      },
      "status": "stored"
    }
    "#);
}

#[test]
fn injected_tables_and_directory() {
    let teryt = TerytDirectory::from_units(
        vec![Voivodeship {
            code: "12".to_string(),
            name: "malopolskie".to_string(),
            full_name: "małopolskie".to_string(),
            capital: "Kraków".to_string(),
        }],
        vec![County {
            code: "1211".to_string(),
            name: "nowotarski".to_string(),
            full_name: "nowotarski".to_string(),
            kind: CountyKind::County,
            voivodeship: "malopolskie".to_string(),
        }],
        vec![Municipality {
            code: "1211052".to_string(),
            name: "lapsze-nizne".to_string(),
            full_name: "Łapsze Niżne".to_string(),
            kind: MunicipalityKind::Rural,
            county: "nowotarski".to_string(),
            voivodeship: "malopolskie".to_string(),
        }],
    )
    .expect("test directory");
    let tables = ReferenceTables::empty().with_brand("acme", "ACME Corp");
    let standardizer = Standardizer::new(
        &tables,
        Some(Arc::new(teryt)),
        StandardizeOptions::new().with_today(today()),
    )
    .expect("standardizer");

    let out = standardizer.standardize(&record(json!({
        "item_name": "telfon",
        "municipality": "Łapsze Niżne",
        "custom_fields": { "brand": "acme rocket" }
    })));
    assert_eq!(out.item_name.as_deref(), Some("Telfon"));
    assert_eq!(out.municipality.as_deref(), Some("lapsze-nizne"));
    assert_eq!(out.custom_field("brand").as_deref(), Some("ACME Corp"));
}
