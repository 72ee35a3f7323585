//! The keyed store.
//!
//! A [`KeyedStore`] is a mutable, insertion-ordered mapping from string keys
//! to [`Value`]s. A key containing the delimiter (`/` by default) addresses
//! an item one level down, inside the mapping stored under the part before
//! the delimiter:
//!
//! ```
//! use keyedstore::{KeyedStore, Value};
//!
//! let mut store = KeyedStore::new();
//! store.set("created/readable", "November 7, 2025");
//! store.set("created/timestamp", "2025-11-07 01:23:45");
//!
//! assert!(store.has("created/timestamp"));
//! assert_eq!(store.get("created/readable"), Some(&Value::from("November 7, 2025")));
//! assert_eq!(store.get_keys(), Some(vec!["created"]));
//! ```
//!
//! # Unset vs. empty
//!
//! A store built with [`KeyedStore::new`] holds no mapping at all
//! ([`is_null`](KeyedStore::is_null)). A store built from an empty mapping
//! holds one that happens to be empty. [`is_empty`](KeyedStore::is_empty)
//! treats both as empty unless asked to be strict.
//!
//! # Absent vs. null
//!
//! [`get`](KeyedStore::get) returns `None` for keys that are not present and
//! `Some(&Value::Null)` for keys that hold a stored null.
//! [`has`](KeyedStore::has) reports presence;
//! [`has_value_at`](KeyedStore::has_value_at) additionally requires a
//! non-null value.

use crate::builder::{KeyedStoreBuilder, StoreConfig};
use keyedstore_core::{parse_key, Object, ParsedKey, Value};
use tracing::{debug, trace};

/// In-memory key/value container with one-level nested keys.
///
/// The mapping passed at construction is kept as a snapshot; [`reset`]
/// restores it. The snapshot is an independent copy, so mutating the store
/// (including nested mappings) never changes what `reset` restores.
///
/// [`reset`]: KeyedStore::reset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedStore {
    values: Option<Object>,
    initial: Option<Object>,
    config: StoreConfig,
}

impl KeyedStore {
    /// Create an uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `values`, which also become the reset snapshot.
    pub fn with_values(values: Object) -> Self {
        Self::from_parts(Some(values), StoreConfig::default())
    }

    /// Create a builder for store configuration.
    pub fn builder() -> KeyedStoreBuilder {
        KeyedStoreBuilder::new()
    }

    pub(crate) fn from_parts(values: Option<Object>, config: StoreConfig) -> Self {
        Self {
            initial: values.clone(),
            values,
            config,
        }
    }

    /// The store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn parse<'k>(&self, key: &'k str) -> ParsedKey<'k> {
        parse_key(key, self.config.delimiter)
    }

    /// The mapping, if it is set and holds at least one entry.
    fn populated(&self) -> Option<&Object> {
        self.values.as_ref().filter(|values| !values.is_empty())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns true if `key` is present.
    ///
    /// For a compound key, the set must be present and its mapping must
    /// contain the item. A key holding [`Value::Null`] is present.
    pub fn has(&self, key: &str) -> bool {
        let Some(values) = self.populated() else {
            return false;
        };

        match self.parse(key) {
            ParsedKey::Simple(key) => values.contains_key(key),
            ParsedKey::Compound { set, item } => values
                .get(set)
                .is_some_and(|nested| nested.nested_contains(item)),
        }
    }

    /// Returns true if `key` is present and holds a non-null value.
    pub fn has_value_at(&self, key: &str) -> bool {
        if self.is_empty(false) {
            return false;
        }

        self.get(key).is_some_and(|value| !value.is_null())
    }

    /// Returns true if the mapping is set and not empty.
    pub fn has_any(&self) -> bool {
        self.populated().is_some()
    }

    /// Returns true if the store is empty.
    ///
    /// Non-strict: an unset mapping counts as empty.
    /// Strict: only a set-but-empty mapping counts as empty.
    pub fn is_empty(&self, strict: bool) -> bool {
        match &self.values {
            Some(values) => values.is_empty(),
            None => !strict,
        }
    }

    /// Shorthand for `is_empty(true)`.
    pub fn is_empty_strict(&self) -> bool {
        self.is_empty(true)
    }

    /// Returns true if the mapping is unset.
    pub fn is_null(&self) -> bool {
        self.values.is_none()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.values.as_ref().map_or(0, Object::len)
    }

    /// Get the value at `key`.
    ///
    /// Returns `None` when the key is not present. For a compound key the
    /// item is read from the mapping at the set; an array stored there is
    /// read by index (`"list/0"`).
    ///
    /// Callers holding an optional key get the same "absent" answer with
    /// `key.and_then(|k| store.get(k))`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let values = self.populated()?;

        match self.parse(key) {
            ParsedKey::Simple(key) => values.get(key),
            ParsedKey::Compound { set, item } => values.get(set)?.nested_get(item),
        }
    }

    /// The whole mapping, or `None` if unset.
    pub fn get_all(&self) -> Option<&Object> {
        self.values.as_ref()
    }

    /// Top-level keys in insertion order, or `None` unless [`has_any`](Self::has_any).
    pub fn get_keys(&self) -> Option<Vec<&str>> {
        self.populated()
            .map(|values| values.keys().map(String::as_str).collect())
    }

    /// Top-level values in key order, or `None` unless [`has_any`](Self::has_any).
    pub fn get_values(&self) -> Option<Vec<&Value>> {
        self.populated().map(|values| values.values().collect())
    }

    /// Iterate over top-level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .flat_map(|values| values.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// The snapshot restored by [`reset`](Self::reset).
    pub fn snapshot(&self) -> Option<&Object> {
        self.initial.as_ref()
    }

    /// Consume the store, returning its mapping.
    pub fn into_values(self) -> Option<Object> {
        self.values
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Set `key` to `value`, creating the mapping (and, for a compound key,
    /// the nested mapping) as needed.
    ///
    /// Overwriting an existing key keeps its position. A non-mapping value
    /// already stored at the set of a compound key is converted to a
    /// mapping: arrays keep their elements under index keys, anything else
    /// is replaced by an empty mapping.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        let delimiter = self.config.delimiter;
        let values = self.values.get_or_insert_with(Object::new);

        match parse_key(key, delimiter) {
            ParsedKey::Simple(key) => {
                trace!("set '{}' ({})", key, value.type_name());
                values.insert(key.to_string(), value);
            }
            ParsedKey::Compound { set, item } => {
                trace!("set '{}' in '{}' ({})", item, set, value.type_name());
                let nested = values
                    .entry(set.to_string())
                    .or_insert_with(|| Value::Object(Object::new()));
                if !matches!(nested, Value::Object(_)) {
                    debug!(
                        "Converting {} at '{}' to a nested mapping",
                        nested.type_name(),
                        set
                    );
                }
                nested.make_nested().insert(item.to_string(), value);
            }
        }
    }

    /// Set every entry of `values`, in order. No-op for `None` or an empty map.
    ///
    /// Keys are parsed like [`set`](Self::set), so compound keys write into
    /// nested mappings.
    pub fn set_many(&mut self, values: Option<Object>) {
        match values {
            Some(values) if !values.is_empty() => self.set_entries(values),
            _ => trace!("set_many with no values"),
        }
    }

    /// Set every `(key, value)` pair, in iteration order.
    pub fn set_entries<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut count = 0usize;
        for (key, value) in entries {
            self.set(key.as_ref(), value);
            count += 1;
        }
        debug!("Set {} entries", count);
    }

    /// Delete `key`.
    ///
    /// Returns `false` without changing anything if the key is not present,
    /// otherwise `true` once the key is gone. Deleting the last item of a
    /// nested mapping leaves the (empty) mapping in place. Remaining entries
    /// keep their order.
    pub fn delete(&mut self, key: &str) -> bool {
        if !self.has(key) {
            return false;
        }

        let delimiter = self.config.delimiter;
        if let Some(values) = self.values.as_mut() {
            match parse_key(key, delimiter) {
                ParsedKey::Simple(key) => {
                    values.shift_remove(key);
                }
                ParsedKey::Compound { set, item } => {
                    if let Some(nested) = values.get_mut(set) {
                        nested.make_nested().shift_remove(item);
                    }
                }
            }
        }
        trace!("deleted '{}'", key);

        !self.has(key)
    }

    /// Restore the construction snapshot, or unset the mapping if `nullify`.
    ///
    /// Returns true once the store is in the requested state.
    pub fn reset(&mut self, nullify: bool) -> bool {
        if nullify {
            debug!("Resetting store to null ({} entries dropped)", self.len());
            self.values = None;
            return self.is_null();
        }

        debug!(
            "Resetting store to snapshot ({} entries)",
            self.initial.as_ref().map_or(0, Object::len)
        );
        self.values = self.initial.clone();
        self.values.is_some() == self.initial.is_some()
    }
}

impl From<Object> for KeyedStore {
    fn from(values: Object) -> Self {
        Self::with_values(values)
    }
}
