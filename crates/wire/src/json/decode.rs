//! JSON decoding for keyedstore values
//!
//! Implements decoding of JSON to Value, handling special wrappers:
//! - `$bytes` for binary data (base64)
//! - `$f64` for special floats (NaN, ±Inf, -0.0)
//! - `$object` around a plain object, whose entries are taken as-is

use super::{BYTES_TAG, F64_TAG, OBJECT_TAG};
use base64::Engine;
use keyedstore_core::{Object, SpecialFloatKind, Value};
use serde_json::{Map, Number, Value as JsonValue};
use thiserror::Error;

/// Decode error types
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// Invalid JSON syntax
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Number that fits neither i64 nor f64
    #[error("Unsupported number: {0}")]
    UnsupportedNumber(String),

    /// Invalid base64 in $bytes wrapper
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),

    /// Invalid value in $f64 wrapper
    #[error("Invalid $f64 value: {0}")]
    InvalidF64Wrapper(String),
}

/// Decode a JSON string to Value
pub fn decode_json(json: &str) -> Result<Value, DecodeError> {
    let parsed: JsonValue =
        serde_json::from_str(json).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;
    from_json_value(parsed)
}

/// Convert a `serde_json::Value` to a Value
///
/// Single-key objects tagged `$bytes` or `$f64` with a string payload, or
/// `$object` with an object payload, are unwrapped; any other object stays an
/// object, in its original key order.
pub fn from_json_value(json: JsonValue) -> Result<Value, DecodeError> {
    match json {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(b)),
        JsonValue::Number(n) => decode_number(&n),
        JsonValue::String(s) => Ok(Value::String(s)),
        JsonValue::Array(arr) => arr
            .into_iter()
            .map(from_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        JsonValue::Object(map) => decode_object_or_wrapper(map),
    }
}

fn decode_number(n: &Number) -> Result<Value, DecodeError> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Int(i))
    } else if let Some(f) = n.as_f64() {
        Ok(Value::Float(f))
    } else {
        Err(DecodeError::UnsupportedNumber(n.to_string()))
    }
}

fn decode_object_or_wrapper(mut map: Map<String, JsonValue>) -> Result<Value, DecodeError> {
    // Check for special wrappers (single-key objects with $ prefix)
    if map.len() == 1 {
        if let Some(JsonValue::String(b64)) = map.get(BYTES_TAG) {
            return decode_bytes_wrapper(b64);
        }
        if let Some(JsonValue::String(f64_str)) = map.get(F64_TAG) {
            return decode_f64_wrapper(f64_str);
        }
        match map.remove(OBJECT_TAG) {
            Some(JsonValue::Object(inner)) => return decode_entries(inner),
            Some(other) => {
                map.insert(OBJECT_TAG.to_string(), other);
            }
            None => {}
        }
    }

    decode_entries(map)
}

/// Decode an object's entries without checking it for a wrapper.
fn decode_entries(map: Map<String, JsonValue>) -> Result<Value, DecodeError> {
    let mut obj = Object::with_capacity(map.len());
    for (key, value) in map {
        obj.insert(key, from_json_value(value)?);
    }
    Ok(Value::Object(obj))
}

/// Decode $bytes wrapper (base64)
fn decode_bytes_wrapper(b64: &str) -> Result<Value, DecodeError> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(b64)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))?;
    Ok(Value::Bytes(bytes))
}

/// Decode $f64 wrapper (special floats)
fn decode_f64_wrapper(value: &str) -> Result<Value, DecodeError> {
    SpecialFloatKind::from_wire_string(value)
        .map(|kind| Value::Float(kind.to_f64()))
        .ok_or_else(|| DecodeError::InvalidF64Wrapper(value.to_string()))
}
