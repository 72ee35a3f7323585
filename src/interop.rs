//! Conversions between stores, values, JSON and typed data.
//!
//! A store can be stored inside another store: it converts into a
//! [`Value::Object`] (or [`Value::Null`] when unset) and back with
//! `KeyedStore::try_from(value)`.

use crate::error::{Error, Result};
use crate::store::KeyedStore;
use keyedstore_core::{Object, Value};
use keyedstore_wire::{decode_json, encode_json, encode_json_pretty};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

impl From<KeyedStore> for Value {
    fn from(store: KeyedStore) -> Self {
        store.into_values().map_or(Value::Null, Value::Object)
    }
}

impl TryFrom<Value> for KeyedStore {
    type Error = Error;

    /// `Object` seeds a store (and its snapshot), `Null` gives an
    /// uninitialized store, anything else is a `WrongType` error.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(KeyedStore::with_values(values)),
            Value::Null => Ok(KeyedStore::new()),
            other => Err(keyedstore_core::Error::wrong_type("Object", other.type_name()).into()),
        }
    }
}

impl KeyedStore {
    /// Build a store from a JSON document.
    ///
    /// The root must be an object (seeding the store) or `null`.
    ///
    /// ```
    /// use keyedstore::{KeyedStore, Value};
    ///
    /// let store = KeyedStore::from_json(r#"{"created":{"timestamp":"2025-11-07 01:23:45"}}"#)?;
    /// assert_eq!(store.get("created/timestamp"), Some(&Value::from("2025-11-07 01:23:45")));
    /// # Ok::<(), keyedstore::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let value = decode_json(json)?;
        trace!("decoded {} document", value.type_name());
        KeyedStore::try_from(value)
    }

    /// Encode the mapping as JSON, `null` when unset.
    pub fn to_json(&self) -> String {
        encode_json(&self.mapping_value())
    }

    /// Encode the mapping as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        encode_json_pretty(&self.mapping_value())
    }

    fn mapping_value(&self) -> Value {
        self.get_all()
            .map_or(Value::Null, |values| Value::Object(values.clone()))
    }

    /// Deserialize the value at `key` into `T`.
    ///
    /// Returns `Ok(None)` when the key is absent and a serialization error
    /// when the stored value does not fit `T`. Values go through serde's data
    /// model, not the JSON wire form: `Bytes` read as a byte sequence and
    /// non-finite floats read as null.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.get(key)
            .map(|value| serde_json::to_value(value).and_then(serde_json::from_value::<T>))
            .transpose()
            .map_err(Error::from)
    }

    /// Serialize `value` and set it at `key`.
    ///
    /// Maps are stored as objects whatever their keys, `"$f64"` included.
    pub fn set_as<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let value: Value = serde_json::from_value(serde_json::to_value(value)?)?;
        self.set(key, value);
        Ok(())
    }

    /// Convert the value at `key` into a store of its own.
    ///
    /// Returns `Ok(None)` when the key is absent.
    pub fn get_store(&self, key: &str) -> Result<Option<KeyedStore>> {
        self.get(key)
            .map(|value| KeyedStore::try_from(value.clone()))
            .transpose()
    }
}

impl FromIterator<(String, Value)> for KeyedStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        KeyedStore::with_values(iter.into_iter().collect::<Object>())
    }
}
