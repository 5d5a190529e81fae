//! Item records to a spreadsheet CSV with Polish column headers.
//!
//! The columns match the registry's dane.gov.pl CSV export, and every
//! header is also an alias of [`ImportSource::Spreadsheet`], so an exported
//! file can be imported again.
//!
//! [`ImportSource::Spreadsheet`]: crate::ImportSource::Spreadsheet

use std::io::Write;

use csv::WriterBuilder;
use lostfound_model::ItemRecord;
use serde_json::Value;

use crate::aliases::{CATEGORY, COLLECTION_DEADLINE, ID, STATUS};
use crate::categories::{lookup_category, lookup_status};
use crate::error::{IngestError, Result};

/// Column headers, in output order.
pub const EXPORT_HEADERS: [&str; 14] = [
    "ID",
    "Nazwa",
    "Kategoria",
    "Opis",
    "Data znalezienia",
    "Miejsce znalezienia",
    "Gmina",
    "Powiat",
    "Wojewodztwo",
    "Status",
    "Termin odbioru",
    "Biuro",
    "Adres biura",
    "Telefon",
];

const OFFICE: &str = "lost_and_found_office";

/// Writes `records` as CSV, one row per record. Absent values are empty
/// cells; category and status codes are written as Polish labels.
pub fn write_csv_records(writer: impl Write, records: &[ItemRecord]) -> Result<()> {
    let write_error = |err: csv::Error| IngestError::CsvWrite {
        message: err.to_string(),
    };
    let mut csv = WriterBuilder::new().from_writer(writer);
    csv.write_record(EXPORT_HEADERS).map_err(write_error)?;
    for record in records {
        csv.write_record(export_row(record)).map_err(write_error)?;
    }
    csv.flush().map_err(|err| IngestError::CsvWrite {
        message: err.to_string(),
    })
}

fn export_row(record: &ItemRecord) -> [String; 14] {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let other = |key: &str| record.other.get(key).map(cell).unwrap_or_default();
    let category = other(CATEGORY);
    let status = other(STATUS);
    [
        other(ID),
        text(&record.item_name),
        lookup_category(&category).map_or(category, |known| known.label_pl().to_string()),
        text(&record.description),
        text(&record.date_found),
        text(&record.location_found),
        text(&record.municipality),
        text(&record.county),
        text(&record.voivodeship),
        lookup_status(&status).map_or(status, |known| known.label_pl().to_string()),
        other(COLLECTION_DEADLINE),
        office(record, "name", "office_name"),
        office(record, "address", "office_address"),
        office(record, "phone", "office_phone"),
    ]
}

/// Office detail from the nested object, else from the flat column.
fn office(record: &ItemRecord, nested: &str, flat: &str) -> String {
    record
        .other
        .get(OFFICE)
        .and_then(|office| office.get(nested))
        .or_else(|| record.other.get(flat))
        .map(cell)
        .unwrap_or_default()
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
