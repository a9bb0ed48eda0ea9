use thiserror::Error;

/// Domain checker error types
///
/// Only the input and output layer can fail; building and querying a
/// checker never does.
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Invalid count at line {line}: {value:?}")]
    InvalidCount { line: usize, value: String },

    #[error("Missing count at line {line}")]
    MissingCount { line: usize },

    #[error("Expected {expected} domain lines, found {found} (input ended at line {line})")]
    MissingDomains {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialize error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
