//! Error types for shiftdoc.
//!
//! These cover configuration and output concerns only. Problems with the
//! content of a schedule document are reported as
//! [`ParseDiagnostic`](crate::schedule::ParseDiagnostic) values inside the
//! parsed schedule, never as errors.

use thiserror::Error;

/// Errors that can occur in shiftdoc operations.
#[derive(Error, Debug)]
pub enum ShiftDocError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unknown time zone '{0}'")]
    InvalidTimezone(String),

    #[error("Invalid shift window: {0}")]
    InvalidShiftWindow(String),
}

impl From<serde_json::Error> for ShiftDocError {
    fn from(err: serde_json::Error) -> Self {
        ShiftDocError::Serialization(err.to_string())
    }
}

/// Result type alias for shiftdoc operations.
pub type ShiftDocResult<T> = Result<T, ShiftDocError>;
