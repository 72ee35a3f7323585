//! JSON encoding for keyedstore values
//!
//! Implements encoding of Value to JSON with special wrappers:
//! - `$bytes` for binary data (base64)
//! - `$f64` for special floats (NaN, ±Inf, -0.0)
//! - `$object` around objects that would otherwise read as one of the above

use super::{BYTES_TAG, F64_TAG, OBJECT_TAG};
use base64::Engine;
use keyedstore_core::{Object, SpecialFloatKind, Value};
use serde_json::{Map, Number, Value as JsonValue};

/// Encode a Value to a JSON string
pub fn encode_json(value: &Value) -> String {
    to_json_value(value).to_string()
}

/// Encode a Value to a pretty-printed JSON string
pub fn encode_json_pretty(value: &Value) -> String {
    // Serializing a serde_json::Value to a String cannot fail.
    serde_json::to_string_pretty(&to_json_value(value)).unwrap_or_default()
}

/// Convert a Value to a `serde_json::Value`
///
/// Object key order is preserved. An object whose only key is a wrapper
/// tag is itself wrapped in `$object`.
pub fn to_json_value(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => JsonValue::Number(Number::from(*i)),
        Value::Float(f) => encode_float(*f),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Bytes(b) => encode_bytes(b),
        Value::Array(arr) => JsonValue::Array(arr.iter().map(to_json_value).collect()),
        Value::Object(obj) => encode_object(obj),
    }
}

fn encode_object(obj: &Object) -> JsonValue {
    let map: Map<String, JsonValue> = obj
        .iter()
        .map(|(k, v)| (k.clone(), to_json_value(v)))
        .collect();

    let looks_like_wrapper = obj.len() == 1
        && obj
            .keys()
            .all(|k| [BYTES_TAG, F64_TAG, OBJECT_TAG].contains(&k.as_str()));
    if looks_like_wrapper {
        let mut outer = Map::new();
        outer.insert(OBJECT_TAG.to_string(), JsonValue::Object(map));
        JsonValue::Object(outer)
    } else {
        JsonValue::Object(map)
    }
}

/// Encode a float, using $f64 wrapper for special values
fn encode_float(f: f64) -> JsonValue {
    match (SpecialFloatKind::of(f), Number::from_f64(f)) {
        (None, Some(n)) => JsonValue::Number(n),
        (Some(kind), _) => wrapper(F64_TAG, kind.to_wire_string()),
        // from_f64 only rejects non-finite values, which are special floats
        (None, None) => JsonValue::Null,
    }
}

/// Encode bytes as $bytes wrapper with base64
fn encode_bytes(bytes: &[u8]) -> JsonValue {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    wrapper(BYTES_TAG, &b64)
}

fn wrapper(tag: &str, payload: &str) -> JsonValue {
    let mut map = Map::new();
    map.insert(tag.to_string(), JsonValue::String(payload.to_string()));
    JsonValue::Object(map)
}
