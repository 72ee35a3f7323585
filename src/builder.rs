//! Store configuration and builder.

use crate::store::KeyedStore;
use keyedstore_core::{Object, DEFAULT_DELIMITER};
use serde::{Deserialize, Serialize};

/// Configuration for a [`KeyedStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Character separating the set name from the item name in compound keys.
    pub delimiter: char,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Builder for store configuration.
///
/// # Example
///
/// ```
/// use keyedstore::KeyedStore;
///
/// let mut store = KeyedStore::builder().delimiter('.').build();
/// store.set("created.timestamp", "2025-11-07 01:23:45");
/// assert!(store.has("created.timestamp"));
/// assert!(!store.has("created/timestamp"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyedStoreBuilder {
    config: StoreConfig,
    values: Option<Object>,
}

impl KeyedStoreBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with initial values.
    ///
    /// The values also become the snapshot restored by [`KeyedStore::reset`].
    pub fn values(mut self, values: Object) -> Self {
        self.values = Some(values);
        self
    }

    /// Use a custom compound key delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the store.
    pub fn build(self) -> KeyedStore {
        KeyedStore::from_parts(self.values, self.config)
    }
}
