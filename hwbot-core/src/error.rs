//! Error types raised while interpreting status API payloads

use thiserror::Error;

/// Structural mismatch in a decoded status response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A value had a different JSON type than the API documents
    #[error("unexpected response type: expected {expected}, found {found}")]
    TypeMismatch {
        /// Type the API documents for this value
        expected: &'static str,
        /// Type actually received
        found: &'static str,
    },

    /// A required key is absent from the response
    #[error("response is missing the \"{0}\" key")]
    MissingField(&'static str),
}

/// Problem with a single homework record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required key is absent or does not hold a string
    #[error("homework record is missing the \"{0}\" key")]
    MissingField(&'static str),

    /// The status is not one of the documented review verdicts
    #[error("undocumented homework status \"{0}\"")]
    UnknownStatus(String),
}
