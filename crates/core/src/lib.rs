//! Core types for keyedstore
//!
//! This crate defines the building blocks shared by the store and the wire
//! encoding:
//! - [`Value`] and [`Object`]: the stored value model
//! - [`ParsedKey`] and [`parse_key`]: simple/compound key resolution
//! - [`Error`]: conversion errors

#![warn(missing_docs)]

pub mod error;
pub mod key;
pub mod value;

pub use error::{Error, Result};
pub use key::{parse_key, ParsedKey, DEFAULT_DELIMITER};
pub use value::{Object, SpecialFloatKind, Value};
