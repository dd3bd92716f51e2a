use std::num::ParseIntError;
use thiserror::Error;

/// Reasons a request is rejected before any service is called.
///
/// Display text is returned to the client in the `error` field of the envelope.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Path identifier is an empty string.
    #[error("ID cannot be empty")]
    EmptyId,

    /// Path identifier is not an integer.
    #[error("ID '{value}' is not a valid integer: {source}")]
    InvalidId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Path identifier parsed but is zero or negative.
    #[error("ID must be a positive integer, got {0}")]
    NonPositiveId(i32),

    /// A required text field is missing its value or is blank.
    #[error("Field '{0}' cannot be empty")]
    EmptyField(&'static str),

    /// A numeric field is below zero.
    #[error("Field '{0}' cannot be negative")]
    NegativeField(&'static str),
}
