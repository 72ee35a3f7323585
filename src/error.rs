//! Unified error types for keyedstore.
//!
//! Store operations themselves never fail; missing keys resolve to `None` or
//! `false`. Errors only arise at the edges: converting values into stores,
//! JSON interop, and typed reads.

use thiserror::Error;

/// All keyedstore errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong type for operation
    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },

    /// Malformed JSON input
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for keyedstore operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a wrong-type error.
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Error::WrongType { .. })
    }

    /// Check if this error came from (de)serialization or JSON parsing.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_) | Error::InvalidJson(_))
    }
}

// Convert from internal core errors
impl From<keyedstore_core::Error> for Error {
    fn from(e: keyedstore_core::Error) -> Self {
        match e {
            keyedstore_core::Error::WrongType { expected, actual } => {
                Error::WrongType { expected, actual }
            }
        }
    }
}

// Convert from wire decode errors
impl From<keyedstore_wire::DecodeError> for Error {
    fn from(e: keyedstore_wire::DecodeError) -> Self {
        use keyedstore_wire::DecodeError as DE;
        match e {
            DE::InvalidJson(msg) => Error::InvalidJson(msg),
            DE::UnsupportedNumber(msg) => Error::InvalidJson(format!("unsupported number {}", msg)),
            other => Error::Serialization(other.to_string()),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
