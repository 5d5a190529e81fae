//! CSV rows.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde_json::Value;

use super::{RawRow, read_file, strip_bom};
use crate::error::{IngestError, Result};

/// Reads a CSV file with a header row.
///
/// The delimiter is taken from the header line: spreadsheet exports with a
/// Polish locale use `;`, everything else `,`. Cells are trimmed and empty
/// cells are left out of the row.
pub fn read_csv_rows(path: &Path) -> Result<Vec<RawRow>> {
    let bytes = read_file(path)?;
    parse_csv_rows(path, &bytes)
}

/// Parses CSV content; `path` is only used in error messages.
pub fn parse_csv_rows(path: &Path, bytes: &[u8]) -> Result<Vec<RawRow>> {
    let bytes = strip_bom(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(detect_delimiter(bytes))
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| csv_error(path, &e))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, &e))?;
        let mut row = RawRow::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            if header.is_empty() || value.is_empty() {
                continue;
            }
            row.insert(header.to_string(), Value::String(value.to_string()));
        }
        rows.push(row);
    }
    Ok(rows)
}

fn detect_delimiter(bytes: &[u8]) -> u8 {
    let header = bytes.split(|b| *b == b'\n').next().unwrap_or_default();
    let count = |delimiter: u8| header.iter().filter(|b| **b == delimiter).count();
    if count(b';') > count(b',') { b';' } else { b',' }
}

fn csv_error(path: &Path, e: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<RawRow> {
        parse_csv_rows(Path::new("items.csv"), content.as_bytes()).expect("parse csv")
    }

    #[test]
    fn trims_cells_and_skips_empty_ones() {
        let rows = parse("\u{feff}item_name, county ,gmina\n Portfel , krakowski,\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("item_name"), Some(&Value::from("Portfel")));
        assert_eq!(rows[0].get("county"), Some(&Value::from("krakowski")));
        assert!(!rows[0].contains_key("gmina"));
    }

    #[test]
    fn semicolon_exports() {
        let rows = parse("Nazwa przedmiotu;Kategoria;Opis\nKlucze;klucze;\"pęk, trzy klucze\"\n");
        assert_eq!(rows[0].get("Nazwa przedmiotu"), Some(&Value::from("Klucze")));
        assert_eq!(rows[0].get("Opis"), Some(&Value::from("pęk, trzy klucze")));
    }

    #[test]
    fn short_rows_are_allowed() {
        let rows = parse("a,b,c\n1\n1,2,3\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[1].len(), 3);
    }
}
