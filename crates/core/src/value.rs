//! Value types for keyedstore
//!
//! This module defines the canonical Value type stored under every key.
//!
//! ## Contract
//!
//! - No implicit type coercions between variants
//! - IEEE-754 float equality semantics
//! - Bytes and String are distinct types
//! - Objects keep insertion order; equality ignores it

use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// String-keyed, insertion-ordered map of values.
///
/// This is both the top-level mapping of a store and the nested mapping
/// addressed by a compound key.
pub type Object = IndexMap<String, Value>;

/// Canonical value type
///
/// ## The Eight Types
///
/// 1. `Null` - stored null (present, but without a usable value)
/// 2. `Bool` - Boolean true or false
/// 3. `Int` - 64-bit signed integer
/// 4. `Float` - 64-bit IEEE-754 floating point
/// 5. `String` - UTF-8 encoded string
/// 6. `Bytes` - Arbitrary binary data (distinct from String)
/// 7. `Array` - Ordered sequence of values
/// 8. `Object` - String-keyed, insertion-ordered map of values
///
/// ## Equality Rules
///
/// - Different types are NEVER equal (no type coercion)
/// - `Int(1)` != `Float(1.0)`
/// - `String("abc")` != `Bytes([97, 98, 99])`
/// - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
///
/// ## Serde
///
/// `Value` maps onto the plain serde data model: `Null` is unit, `Bytes`
/// are serialized as bytes, `Object` as a map in insertion order. No wire
/// markers are written or interpreted, so a map keyed `"$f64"` stays a map.
#[derive(Debug, Clone)]
pub enum Value {
    /// Stored null
    Null,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    /// Supports: NaN, +Inf, -Inf, -0.0, subnormals
    Float(f64),

    /// UTF-8 encoded string
    String(String),

    /// Arbitrary binary data
    /// NOT equivalent to String - distinct type
    Bytes(Vec<u8>),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// String-keyed map of values
    Object(Object),
}

impl Value {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as array slice
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as object reference
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to get as mutable object reference
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Consume into the inner object, if this is one
    pub fn into_object(self) -> Option<Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Look up `item` as if this value were a mapping.
    ///
    /// Objects are read directly. Arrays are read by decimal index string
    /// (`"0"`, `"1"`, ...). Every other value reads as an empty mapping.
    pub fn nested_get(&self, item: &str) -> Option<&Value> {
        match self {
            Value::Object(o) => o.get(item),
            Value::Array(a) => parse_index(item).and_then(|i| a.get(i)),
            _ => None,
        }
    }

    /// Returns true if `item` is present when this value is read as a mapping.
    ///
    /// Presence only: an item holding `Null` is present.
    pub fn nested_contains(&self, item: &str) -> bool {
        self.nested_get(item).is_some()
    }

    /// Convert this value in place into an object and return it.
    ///
    /// Arrays become objects keyed by index string, in order. Any other
    /// non-object value is replaced by an empty object.
    pub fn make_nested(&mut self) -> &mut Object {
        if !matches!(self, Value::Object(_)) {
            let converted = match std::mem::replace(self, Value::Null) {
                Value::Array(items) => items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect(),
                _ => Object::new(),
            };
            *self = Value::Object(converted);
        }
        match self {
            Value::Object(o) => o,
            _ => unreachable!("value was converted to an object above"),
        }
    }

    /// Check if this is a special float value requiring wire encoding wrapper
    ///
    /// Special floats: NaN, +Inf, -Inf, -0.0
    /// These require `{"$f64": "..."}` wrapper in JSON wire encoding.
    pub fn is_special_float(&self) -> bool {
        self.special_float_kind().is_some()
    }

    /// Get the special float kind if this is a special float
    pub fn special_float_kind(&self) -> Option<SpecialFloatKind> {
        match self {
            Value::Float(f) => SpecialFloatKind::of(*f),
            _ => None,
        }
    }
}

/// Canonical decimal index: no sign, no leading zeros (except `"0"` itself).
fn parse_index(item: &str) -> Option<usize> {
    if item.is_empty() || (item.len() > 1 && item.starts_with('0')) {
        return None;
    }
    if !item.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    item.parse().ok()
}

/// Kinds of special float values
///
/// These values require special encoding in JSON wire format using the `$f64` wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialFloatKind {
    /// IEEE-754 Not-a-Number
    NaN,
    /// IEEE-754 positive infinity (+Inf)
    PositiveInfinity,
    /// IEEE-754 negative infinity (-Inf)
    NegativeInfinity,
    /// IEEE-754 negative zero (-0.0)
    NegativeZero,
}

impl SpecialFloatKind {
    /// Classify a float, returning `None` for ordinary finite values
    pub fn of(f: f64) -> Option<Self> {
        if f.is_nan() {
            Some(SpecialFloatKind::NaN)
        } else if f == f64::INFINITY {
            Some(SpecialFloatKind::PositiveInfinity)
        } else if f == f64::NEG_INFINITY {
            Some(SpecialFloatKind::NegativeInfinity)
        } else if f == 0.0 && f.is_sign_negative() {
            Some(SpecialFloatKind::NegativeZero)
        } else {
            None
        }
    }

    /// Convert to wire encoding string
    pub fn to_wire_string(&self) -> &'static str {
        match self {
            SpecialFloatKind::NaN => "NaN",
            SpecialFloatKind::PositiveInfinity => "+Inf",
            SpecialFloatKind::NegativeInfinity => "-Inf",
            SpecialFloatKind::NegativeZero => "-0.0",
        }
    }

    /// Parse from wire encoding string
    pub fn from_wire_string(s: &str) -> Option<Self> {
        match s {
            "NaN" => Some(SpecialFloatKind::NaN),
            "+Inf" => Some(SpecialFloatKind::PositiveInfinity),
            "-Inf" => Some(SpecialFloatKind::NegativeInfinity),
            "-0.0" => Some(SpecialFloatKind::NegativeZero),
            _ => None,
        }
    }

    /// Convert to f64 value
    pub fn to_f64(&self) -> f64 {
        match self {
            SpecialFloatKind::NaN => f64::NAN,
            SpecialFloatKind::PositiveInfinity => f64::INFINITY,
            SpecialFloatKind::NegativeInfinity => f64::NEG_INFINITY,
            SpecialFloatKind::NegativeZero => -0.0,
        }
    }
}

// ============================================================================
// Custom PartialEq Implementation (IEEE-754 semantics, no type coercion)
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,

            // Different types: NEVER equal (NO TYPE COERCION)
            _ => false,
        }
    }
}

// ============================================================================
// Serde
// ============================================================================

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::Array(a) => serializer.collect_seq(a),
            Value::Object(o) => serializer.collect_map(o),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a keyedstore value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> Result<Value, E> {
        Ok(Value::Int(i))
    }

    // Integers beyond i64 become floats, as in the JSON decoder.
    fn visit_u64<E: de::Error>(self, u: u64) -> Result<Value, E> {
        Ok(i64::try_from(u).map_or(Value::Float(u as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<Value, E> {
        Ok(Value::Float(f))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_bytes<E: de::Error>(self, b: &[u8]) -> Result<Value, E> {
        Ok(Value::Bytes(b.to_vec()))
    }

    fn visit_byte_buf<E: de::Error>(self, b: Vec<u8>) -> Result<Value, E> {
        Ok(Value::Bytes(b))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut obj = Object::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            obj.insert(key, value);
        }
        Ok(Value::Object(obj))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(a: Vec<Value>) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

// ============================================================================
// Tests
// ============================================================================
