//! Public types for the keyedstore API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Value model
pub use keyedstore_core::{Object, SpecialFloatKind, Value};

// Key parsing
pub use keyedstore_core::{parse_key, ParsedKey, DEFAULT_DELIMITER};

// Wire encoding
pub use keyedstore_wire::DecodeError;
