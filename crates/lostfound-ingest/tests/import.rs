//! Reading import files and mapping them to records.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use lostfound_ingest::{
    ImportSource, IngestError, import_rows, read_rows, write_csv_records,
};
use serde_json::json;
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).expect("date")
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write file");
    path
}

#[test]
fn spreadsheet_csv() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        dir.path(),
        "rejestr.csv",
        "\u{feff}Nazwa przedmiotu;Kategoria;Data znalezienia;Gmina;Powiat;Wojewodztwo;Nazwa biura;Status\n\
         telfon samsung;Telefon;45292;Kraków;Kraków;małopolskie;BRZ Kraków;Przechowywany\n\
         Portfel skórzany;portfel;;;;;;zwrócony\n",
    );

    let rows = read_rows(&path).expect("read csv");
    let outcome = import_rows(ImportSource::Spreadsheet, &rows, today());
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);

    let value = serde_json::to_value(&outcome.records).expect("serialize");
    insta::assert_json_snapshot!(value, @r#"
    [
      {
        "item_name": "telfon samsung",
        "municipality": "Kraków",
        "county": "Kraków",
        "voivodeship": "małopolskie",
        "date_found": "2024-01-01",
        "category": "phone",
        "collection_deadline": "2026-05-10",
        "lost_and_found_office": {
          "name": "BRZ Kraków"
        },
        "status": "stored"
      },
      {
        "item_name": "Portfel skórzany",
        "date_found": "2024-05-10",
        "category": "wallet",
        "collection_deadline": "2026-05-10",
        "status": "returned"
      }
    ]
    "#);
}

#[test]
fn dane_gov_json() {
    let dir = TempDir::new().expect("temp dir");
    let document = json!({
        "meta": { "count": 2 },
        "data": [
            {
                "id": 1042,
                "nazwa": "Rower górski",
                "category": "bicycle",
                "gmina": "Gdańsk",
                "wojewodztwo": "pomorskie",
                "biuro": "BRZ Gdańsk",
                "telefon": "58 323 70 00"
            },
            { "opis": "bez nazwy" }
        ]
    });
    let path = write(dir.path(), "dane.json", &document.to_string());

    let rows = read_rows(&path).expect("read json");
    let outcome = import_rows(ImportSource::DaneGov, &rows, today());
    assert_eq!(outcome.records.len(), 2);

    let bike = &outcome.records[0];
    assert_eq!(bike.other.get("id"), Some(&json!("1042")));
    assert_eq!(bike.item_name.as_deref(), Some("Rower górski"));
    assert_eq!(bike.date_found.as_deref(), Some("2024-05-10"));
    assert_eq!(
        bike.other.get("lost_and_found_office"),
        Some(&json!({ "name": "BRZ Gdańsk", "phone": "58 323 70 00" }))
    );

    assert_eq!(outcome.records[1].item_name.as_deref(), Some("Unknown"));
    assert_eq!(outcome.records[1].description.as_deref(), Some("bez nazwy"));
}

#[test]
fn native_rows_keep_custom_fields() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        dir.path(),
        "export.json",
        &json!([{
            "item_name": "Kluczyki",
            "category": "keys",
            "custom_fields": { "car_brand": "vw", "key_count": 2 },
            "lost_and_found_office": { "name": "BRZ Poznań", "email": "brz@poznan.pl" }
        }])
        .to_string(),
    );

    let rows = read_rows(&path).expect("read json");
    let outcome = import_rows(ImportSource::Native, &rows, today());
    let record = &outcome.records[0];
    assert_eq!(record.custom_field("car_brand").as_deref(), Some("vw"));
    assert_eq!(
        record.other.get("lost_and_found_office"),
        Some(&json!({ "name": "BRZ Poznań", "email": "brz@poznan.pl" }))
    );
    // No date fallback for native rows.
    assert_eq!(record.date_found, None);
}

#[test]
fn native_rows_round_trip_every_column() {
    let raw = json!({
        "item_name": "Portfel",
        "public_id": "ZN-2024-0042",
        "description": "",
        "coordinates_lat": 50.06,
        "coordinates_lon": 19.93,
        "office_name": "BRZ Kraków",
        "office_hours": "pn-pt 8-16",
        "entry_date": "2024-05-01",
        "update_date": null,
        "category_pl": "Portfel"
    });
    let rows = vec![raw.as_object().cloned().expect("object")];
    let outcome = import_rows(ImportSource::Native, &rows, today());
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);

    let value = serde_json::to_value(&outcome.records[0]).expect("serialize");
    assert_eq!(value, raw);
}

#[test]
fn missing_item_names_are_reported() {
    let rows = vec![json!({ "opis": "czarny parasol" })
        .as_object()
        .cloned()
        .expect("object")];
    let outcome = import_rows(ImportSource::Spreadsheet, &rows, today());
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].to_string(), "row 1 (item_name): missing item name");
}

#[test]
fn exported_csv_imports_as_spreadsheet() {
    let dir = TempDir::new().expect("temp dir");
    let records = import_rows(
        ImportSource::Native,
        &[json!({
            "id": "ZN-2024-0042",
            "item_name": "Rower górski",
            "category": "bicycle",
            "date_found": "2024-05-09",
            "county": "krakowski",
            "status": "liquidated",
            "collection_deadline": "2026-05-09",
            "lost_and_found_office": { "name": "BRZ Kraków", "phone": "12 616 00 00" }
        })
        .as_object()
        .cloned()
        .expect("object")],
        today(),
    )
    .records;

    let path = dir.path().join("eksport.csv");
    let file = fs::File::create(&path).expect("create export");
    write_csv_records(file, &records).expect("write export");

    let rows = read_rows(&path).expect("read export");
    let outcome = import_rows(ImportSource::Spreadsheet, &rows, today());
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
    let value = serde_json::to_value(&outcome.records).expect("serialize");
    insta::assert_json_snapshot!(value, @r#"
    [
      {
        "item_name": "Rower górski",
        "county": "krakowski",
        "date_found": "2024-05-09",
        "category": "bicycle",
        "collection_deadline": "2026-05-09",
        "id": "ZN-2024-0042",
        "lost_and_found_office": {
          "name": "BRZ Kraków",
          "phone": "12 616 00 00"
        },
        "status": "liquidated"
      }
    ]
    "#);
}

#[test]
fn read_errors() {
    let dir = TempDir::new().expect("temp dir");

    let missing = read_rows(&dir.path().join("missing.csv")).expect_err("missing file");
    assert!(matches!(missing, IngestError::FileNotFound { .. }));

    let path = write(dir.path(), "rows.json", r#"{"metadata": {}}"#);
    let shape = read_rows(&path).expect_err("no rows");
    assert!(matches!(shape, IngestError::UnsupportedShape { .. }));

    let path = write(dir.path(), "rows.txt", "a,b\n1,2\n");
    let format = read_rows(&path).expect_err("txt");
    assert!(matches!(format, IngestError::UnsupportedFormat { .. }));
}
