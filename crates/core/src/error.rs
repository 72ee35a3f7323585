//! Error types for the value layer

use thiserror::Error;

/// Errors raised when converting between values and typed containers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Value has the wrong type for the requested conversion
    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `WrongType` error from type names
    pub fn wrong_type(expected: &str, actual: &str) -> Self {
        Error::WrongType {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
