//! Store API Comprehensive Test Suite
//!
//! Exercises the public `KeyedStore` surface end to end: key resolution,
//! mutation, snapshot reset, and embedding stores inside stores.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test store_api_comprehensive
//!
//! # Run nested key tests only
//! cargo test --test store_api_comprehensive store::nested_ops::
//! ```

use std::sync::Once;

use keyedstore::{KeyedStore, Object, Value};


// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

static TRACING: Once = Once::new();

/// Install a test-writer subscriber so store events show up in failing tests
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Build an object from `(key, value)` pairs, keeping their order
pub fn object(entries: Vec<(&str, Value)>) -> Object {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// A short story record with one nested mapping
pub fn story_values() -> Object {
    object(vec![
        ("id", Value::Int(1)),
        ("title", Value::from("A Short Story")),
        ("is_active", Value::Bool(false)),
        (
            "created",
            Value::Object(object(vec![(
                "timestamp",
                Value::from("2025-11-07 01:23:45"),
            )])),
        ),
    ])
}

/// Store seeded with [`story_values`]
pub fn story_store() -> KeyedStore {
    init_tracing();
    KeyedStore::with_values(story_values())
}

/// Uninitialized store
pub fn null_store() -> KeyedStore {
    init_tracing();
    KeyedStore::new()
}

/// Standard test values covering common types
pub fn standard_test_values() -> Vec<(&'static str, Value)> {
    vec![
        ("null", Value::Null),
        ("bool_true", Value::Bool(true)),
        ("bool_false", Value::Bool(false)),
        ("int_pos", Value::Int(8675309)),
        ("int_neg", Value::Int(-42)),
        ("int_zero", Value::Int(0)),
        ("float_pos", Value::Float(2.5)),
        ("string", Value::String("bffc4d08-1750-41a7-9fdd-345187eb9ff2".into())),
        ("string_empty", Value::String("".into())),
        ("bytes", Value::Bytes(vec![0x00, 0x01, 0xFF, 0xFE])),
        (
            "array",
            Value::Array(vec![
                Value::from("one"),
                Value::from("two"),
                Value::from("three"),
            ]),
        ),
        (
            "object",
            Value::Object(object(vec![
                ("one", Value::Int(1)),
                ("two", Value::Int(2)),
                ("three", Value::Int(3)),
            ])),
        ),
    ]
}
