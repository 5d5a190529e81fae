//! Import of raw lost-and-found rows.
//!
//! Offices hand over their registers in several shapes: the registry's own
//! JSON export, spreadsheets with Polish column headers, and dane.gov.pl
//! open-data rows. This crate reads those files into raw rows and maps the
//! rows onto [`ItemRecord`](lostfound_model::ItemRecord)s through an
//! explicit alias table per source. Records can be written back out as a
//! spreadsheet CSV that the spreadsheet source reads again.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use lostfound_ingest::{ImportSource, import_rows, read_rows};
//!
//! let rows = read_rows(Path::new("rejestr.csv"))?;
//! let outcome = import_rows(ImportSource::Spreadsheet, &rows, today);
//! for warning in &outcome.warnings {
//!     eprintln!("{warning}");
//! }
//! ```

#![deny(unsafe_code)]

mod aliases;
mod categories;
mod error;
mod export;
mod mapping;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Reading ===
pub use reader::{
    MAX_IMPORT_FILE_SIZE, RawRow, parse_csv_rows, parse_json_rows, read_csv_rows,
    read_json_rows, read_rows,
};

// === Field Mapping ===
pub use aliases::{Fallback, FieldAliases, ImportSource};
pub use categories::{lookup_category, lookup_status, map_category, map_status};
pub use mapping::{ImportOutcome, ImportWarning, excel_serial_date, import_rows};

// === Export ===
pub use export::{EXPORT_HEADERS, write_csv_records};
