//! Shared CSV utilities for loading reference lists.

use std::collections::BTreeMap;
use std::io::Read;

use csv::ReaderBuilder;

use crate::error::{Result, TerytError};

pub(crate) type Row = BTreeMap<String, String>;

/// Read CSV text into a vector of row maps.
///
/// Each row is represented as a BTreeMap with column headers as keys.
/// Handles BOM characters and trims whitespace from values.
pub(crate) fn read_csv_rows(source_name: &str, input: impl Read) -> Result<Vec<Row>> {
    let csv_error = |err: csv::Error| TerytError::Csv {
        source_name: source_name.to_string(),
        message: err.to_string(),
    };

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers
                .get(idx)
                .unwrap_or("")
                .trim_matches('\u{feff}')
                .trim()
                .to_string();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Get a required, non-empty field value from a row.
///
/// `row_number` is 1-based and counts data rows (the header is row 0).
pub(crate) fn require(
    row: &Row,
    key: &'static str,
    source_name: &str,
    row_number: usize,
) -> Result<String> {
    get_optional(row, key).ok_or_else(|| TerytError::MissingField {
        source_name: source_name.to_string(),
        row: row_number,
        field: key,
    })
}

/// Get an optional field value from a row (None if empty or missing).
pub(crate) fn get_optional(row: &Row, key: &str) -> Option<String> {
    row.get(key).filter(|v| !v.is_empty()).cloned()
}
