use std::path::PathBuf;

use lostfound_model::UnitKind;

#[derive(Debug, thiserror::Error)]
pub enum TerytError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {source_name}: {message}")]
    Csv { source_name: String, message: String },

    #[error("{source_name} row {row}: missing required field `{field}`")]
    MissingField {
        source_name: String,
        row: usize,
        field: &'static str,
    },

    #[error("{source_name} row {row}: {message}")]
    InvalidValue {
        source_name: String,
        row: usize,
        message: String,
    },

    #[error("{kind} `{name}` refers to unknown parent `{parent}`")]
    UnknownParent {
        kind: UnitKind,
        name: String,
        parent: String,
    },

    #[error("duplicate {kind} {what} `{value}`")]
    Duplicate {
        kind: UnitKind,
        what: &'static str,
        value: String,
    },
}

impl TerytError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TerytError>;
