//! # keyedstore
//!
//! In-memory key/value container with one level of nested keys and
//! snapshot reset.
//!
//! ## Quick Start
//!
//! ```
//! use keyedstore::prelude::*;
//!
//! let mut store = KeyedStore::new();
//! assert!(store.is_null());
//!
//! // Simple keys address top-level entries
//! store.set("title", "A Short Story");
//!
//! // Compound keys address one level down
//! store.set("created/timestamp", "2025-11-07 01:23:45");
//! assert!(store.has("created/timestamp"));
//!
//! // Absent keys resolve to None, never an error
//! assert_eq!(store.get("second"), None);
//! ```
//!
//! ## Snapshots
//!
//! ```
//! use keyedstore::prelude::*;
//!
//! let mut initial = Object::new();
//! initial.insert("dogs".into(), Value::Int(4));
//!
//! let mut store = KeyedStore::with_values(initial);
//! store.set("dogs", 6);
//!
//! assert!(store.reset(false));
//! assert_eq!(store.get("dogs"), Some(&Value::Int(4)));
//!
//! assert!(store.reset(true));
//! assert!(store.is_null());
//! ```
//!
//! ## Logging
//!
//! Mutations emit `tracing` events at `trace` level and resets at `debug`
//! level. Install any `tracing` subscriber to see them.

#![warn(missing_docs)]

mod builder;
mod error;
mod interop;
mod store;
mod types;

pub mod prelude;

// Re-export main entry points
pub use builder::{KeyedStoreBuilder, StoreConfig};
pub use error::{Error, Result};
pub use store::KeyedStore;

// Re-export types
pub use types::*;
