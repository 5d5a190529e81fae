//! JSON rows.

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use super::{RawRow, read_file, strip_bom};
use crate::error::{IngestError, Result};

/// Keys that wrap the row list in exported and open-data documents.
const ROW_LIST_KEYS: &[&str] = &["data", "items"];

/// Reads a JSON file holding rows.
///
/// Accepted shapes: a top-level array of objects, or an object whose
/// `data` (dane.gov.pl exports and API responses) or `items` key holds
/// that array. Array elements that are not objects are skipped.
pub fn read_json_rows(path: &Path) -> Result<Vec<RawRow>> {
    let bytes = read_file(path)?;
    parse_json_rows(path, &bytes)
}

/// Parses JSON content; `path` is only used in error messages.
pub fn parse_json_rows(path: &Path, bytes: &[u8]) -> Result<Vec<RawRow>> {
    let document: Value =
        serde_json::from_slice(strip_bom(bytes)).map_err(|source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;

    let elements = match document {
        Value::Array(elements) => elements,
        Value::Object(mut object) => {
            let list = ROW_LIST_KEYS
                .iter()
                .find_map(|key| match object.remove(*key) {
                    Some(Value::Array(elements)) => Some(elements),
                    _ => None,
                });
            list.ok_or_else(|| IngestError::UnsupportedShape {
                path: path.to_path_buf(),
                reason: "object has no `data` or `items` array".to_string(),
            })?
        }
        _ => {
            return Err(IngestError::UnsupportedShape {
                path: path.to_path_buf(),
                reason: "expected an array of objects".to_string(),
            });
        }
    };

    let mut rows = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        match element {
            Value::Object(row) => rows.push(row),
            _ => warn!(row = index + 1, "skipping non-object JSON row"),
        }
    }
    Ok(rows)
}
