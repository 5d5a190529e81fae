//! Raw row loading from CSV and JSON files.
//!
//! A row is a JSON object keyed by the source's column names. CSV cells
//! become strings; JSON rows keep their value types (nested office
//! objects, numeric dates from spreadsheet exports).

mod delimited;
mod json;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{IngestError, Result};

pub use delimited::{parse_csv_rows, read_csv_rows};
pub use json::{parse_json_rows, read_json_rows};

/// One source row before field mapping.
pub type RawRow = Map<String, Value>;

/// Maximum import file size (100 MB).
pub const MAX_IMPORT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads rows from `path`, choosing the parser by extension.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => read_csv_rows(path),
        Some("json") => read_json_rows(path),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Reads a whole import file after checking its size and encoding.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let size = file
        .metadata()
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .len();
    if size > MAX_IMPORT_FILE_SIZE {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: MAX_IMPORT_FILE_SIZE,
        });
    }

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    validate_encoding(path, &bytes)?;
    Ok(bytes)
}

/// Rejects UTF-16 input; spreadsheet tools produce it when saving
/// "Unicode text".
fn validate_encoding(path: &Path, bytes: &[u8]) -> Result<()> {
    let encoding = match bytes {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Drops a leading UTF-8 byte order mark.
pub(crate) fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}
