use std::path::PathBuf;
use thiserror::Error;

/// Why a single line of the todo file could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 3 fields separated by '|', found {0}")]
    FieldCount(usize),

    #[error("invalid id: {0:?}")]
    BadId(String),

    #[error("unrecognized due date: {0:?}")]
    BadDate(String),

    #[error("dangling escape at end of line")]
    DanglingEscape,

    #[error("year {0} cannot be stored; expected 0 to 9999")]
    YearOutOfRange(i32),
}

/// A configuration value outside the accepted set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {setting} `{value}`; expected {expected}")]
pub struct UnknownSetting {
    pub setting: &'static str,
    pub value: String,
    pub expected: &'static str,
}

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at {}:{line}: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: RecordError,
    },

    #[error("Cannot store todo: {0}")]
    Unstorable(RecordError),

    #[error("No todo at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl TodoError {
    /// Write failures leave the store unchanged, so the same call can be repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TodoError::Write { .. })
    }
}

impl From<confique::Error> for TodoError {
    fn from(err: confique::Error) -> Self {
        TodoError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
