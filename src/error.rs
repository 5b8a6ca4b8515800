use thiserror::Error;

/// Failures of the on-disk persistence layer. The store logs and swallows
/// these; they never reach store callers.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Persist error: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Whole-file import problems. The message becomes the single entry in
/// `ImportResult::errors`.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Cannot read file: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error("File is empty or has no data rows")]
    NoDataRows,

    #[error("Invalid header: expected {expected} columns, got {actual}")]
    HeaderMismatch { expected: usize, actual: usize },
}

/// Per-row import problems. Counted as skipped; the rest of the file goes on.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RowError {
    #[error("Row {row}: expected {expected} fields, got {actual}")]
    FieldCount {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Row {0}: invalid session ID")]
    InvalidSessionId(usize),

    #[error("Row {0}: missing exercise name")]
    MissingExerciseName(usize),

    #[error("Row {0}: invalid numeric values")]
    InvalidNumbers(usize),
}

pub type Result<T> = std::result::Result<T, StoreError>;
