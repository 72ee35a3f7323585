//! Wire encoding for keyedstore
//!
//! This crate implements JSON interop for keyedstore values.
//! Non-JSON-native values use special wrappers:
//!
//! - `$bytes`: Base64 encoding for `Value::Bytes`
//! - `$f64`: Special float wrapper for NaN, ±Inf, -0.0
//! - `$object`: Escape for objects whose only key is one of these tags
//!
//! ## Wire Encoding Rules
//!
//! | Value Type | JSON Encoding |
//! |------------|--------------|
//! | Null | `null` |
//! | Bool | `true`/`false` |
//! | Int | number |
//! | Float (normal) | number |
//! | Float (special) | `{"$f64": "..."}` |
//! | String | `"..."` |
//! | Bytes | `{"$bytes": "..."}` |
//! | Array | `[...]` |
//! | Object | `{...}` (insertion order) |
//! | Object with a single tag key | `{"$object": {...}}` |
//!
//! ## Examples
//!
//! ```
//! use keyedstore_wire::{encode_json, decode_json};
//! use keyedstore_core::Value;
//!
//! let value = Value::Int(42);
//! let json = encode_json(&value);
//! assert_eq!(json, "42");
//!
//! let decoded = decode_json("42").unwrap();
//! assert_eq!(decoded, Value::Int(42));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    decode_json, encode_json, encode_json_pretty, from_json_value, to_json_value, DecodeError,
};
