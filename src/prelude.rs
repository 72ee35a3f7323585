//! Convenient imports for keyedstore.
//!
//! ```
//! use keyedstore::prelude::*;
//!
//! let mut store = KeyedStore::new();
//! store.set("key", "value");
//! ```

// Main entry point
pub use crate::builder::{KeyedStoreBuilder, StoreConfig};
pub use crate::store::KeyedStore;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{Object, ParsedKey, Value};
