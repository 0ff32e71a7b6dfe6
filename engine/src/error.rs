//! Error types for the Tally engine.

use crate::RecordId;
use thiserror::Error;

/// All possible errors from the Tally engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Validation errors
    #[error("email already in use: {0}")]
    DuplicateEmail(String),

    #[error("username and password are required")]
    MissingCredentials,

    #[error("invalid credentials")]
    InvalidCredentials,

    // Referential errors
    #[error("movement references unknown material: {0}")]
    UnknownMaterial(RecordId),

    // State errors
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedRecord(e.to_string())
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
