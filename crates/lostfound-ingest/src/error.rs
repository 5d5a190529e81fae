//! Error types for row import.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading import files or writing exports.
///
/// Mapping rows to records never fails; problems with individual values
/// are reported as warnings instead.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Import file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size})")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File is not UTF-8.
    #[error("unsupported encoding {encoding} in {path}; save the file as UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Extension is neither `.csv` nor `.json`.
    #[error("unsupported import format: {path} (expected .csv or .json)")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to parse JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON parsed, but does not hold a list of row objects.
    #[error("unsupported JSON shape in {path}: {reason}")]
    UnsupportedShape { path: PathBuf, reason: String },

    // === Export Errors ===
    /// Failed to write CSV output.
    #[error("failed to write CSV: {message}")]
    CsvWrite { message: String },
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, IngestError>;
