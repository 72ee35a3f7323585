//! Lifecycle Tests
//!
//! Tests for construction states, emptiness checks, and reset.

use crate::*;

// =============================================================================
// CONSTRUCTION STATE TESTS
// =============================================================================

#[test]
fn test_null_store_state() {
    let store = null_store();

    assert!(store.is_null());
    assert!(!store.has_any());
    assert!(store.is_empty(false));
    assert!(!store.is_empty(true));
    assert_eq!(store.get_all(), None);
    assert_eq!(store.get_keys(), None);
    assert_eq!(store.get_values(), None);
}

#[test]
fn test_empty_store_state() {
    let store = KeyedStore::with_values(Object::new());

    assert!(!store.is_null());
    assert!(store.is_empty(false));
    assert!(store.is_empty(true));
    assert!(!store.has_any());
}

#[test]
fn test_populated_store_state() {
    let store = story_store();

    assert!(!store.is_null());
    assert!(!store.is_empty(false));
    assert!(!store.is_empty(true));
    assert!(store.has_any());
    assert_eq!(store.len(), 4);
}

#[test]
fn test_has_value_at_on_empty_store() {
    let store = KeyedStore::with_values(Object::new());
    assert!(!store.has_value_at("anything"));
}

// =============================================================================
// RESET TESTS
// =============================================================================

#[test]
fn test_reset_scenario() {
    let mut store = KeyedStore::with_values(object(vec![
        ("ducks", Value::Int(3)),
        ("dogs", Value::Int(4)),
        ("horses", Value::Int(2)),
    ]));

    assert!(store.has("ducks"));
    assert!(store.has("dogs"));
    assert!(store.has("horses"));
    assert_eq!(store.get("dogs"), Some(&Value::Int(4)));

    store.set("dogs", 6);
    assert_eq!(store.get("dogs"), Some(&Value::Int(6)));

    assert!(store.has_any());
    assert!(!store.is_empty(false));
    assert!(!store.is_empty(true));
    assert!(!store.is_null());

    assert!(store.reset(false));
    assert_eq!(store.get("dogs"), Some(&Value::Int(4)));

    assert!(store.reset(true));
    assert!(!store.has("ducks"));
    assert!(!store.has("dogs"));
    assert!(!store.has("horses"));
    assert!(store.get("dogs").is_none());
    assert!(!store.has_any());
    assert!(store.is_empty(false));
    assert!(!store.is_empty(true));
    assert!(store.is_null());
}

#[test]
fn test_reset_discards_added_and_deleted_keys() {
    let mut store = story_store();
    store.set("pages", 12);
    store.delete("title");

    assert!(store.reset(false));
    assert_eq!(store.get_all(), Some(&story_values()));
    assert_eq!(
        store.get_keys(),
        Some(vec!["id", "title", "is_active", "created"])
    );
}

#[test]
fn test_reset_restores_nested_mapping() {
    let mut store = story_store();
    store.set("created/timestamp", "2030-01-01 00:00:00");
    store.set("created/readable", "January 1, 2030");

    assert!(store.reset(false));
    assert_eq!(
        store.get("created"),
        Some(&Value::Object(object(vec![(
            "timestamp",
            Value::from("2025-11-07 01:23:45")
        )])))
    );
}

#[test]
fn test_reset_after_nullify_restores_snapshot() {
    let mut store = story_store();

    assert!(store.reset(true));
    assert!(store.is_null());

    assert!(store.reset(false));
    assert_eq!(store.get_all(), Some(&story_values()));
}

#[test]
fn test_reset_on_null_store_stays_null() {
    let mut store = null_store();
    store.set("id", 1);

    assert!(store.reset(false));
    assert!(store.is_null());
    assert!(!store.has("id"));
}

#[test]
fn test_reset_empty_store_restores_empty() {
    let mut store = KeyedStore::with_values(Object::new());
    store.set("id", 1);

    assert!(store.reset(false));
    assert!(!store.is_null());
    assert!(store.is_empty(true));
}

#[test]
fn test_nullify_is_unconditional() {
    for mut store in [null_store(), KeyedStore::with_values(Object::new()), story_store()] {
        assert!(store.reset(true));
        assert!(store.is_null());
    }
}

#[test]
fn test_snapshot_unchanged_by_mutation() {
    let mut store = story_store();
    store.set("created/timestamp", "2030-01-01 00:00:00");
    store.delete("id");

    assert_eq!(store.snapshot(), Some(&story_values()));
}
