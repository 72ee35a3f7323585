//! Key parsing
//!
//! A key either addresses a top-level entry directly (simple key) or, when it
//! contains the delimiter, an item inside the mapping stored under a
//! top-level entry (compound key). Only one level of nesting exists: the key
//! is split on the first delimiter and the remainder belongs to the item.

/// Delimiter separating the set name from the item name.
pub const DEFAULT_DELIMITER: char = '/';

/// A key after parsing.
///
/// Borrows from the key string; parsing never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedKey<'a> {
    /// Addresses a top-level entry.
    Simple(&'a str),
    /// Addresses `item` inside the mapping stored at top-level key `set`.
    Compound {
        /// Top-level key holding the nested mapping
        set: &'a str,
        /// Key within the nested mapping
        item: &'a str,
    },
}

impl<'a> ParsedKey<'a> {
    /// Returns true for compound keys
    pub fn is_compound(&self) -> bool {
        matches!(self, ParsedKey::Compound { .. })
    }

    /// The top-level key this key resolves through.
    pub fn set_name(&self) -> &'a str {
        match self {
            ParsedKey::Simple(key) => key,
            ParsedKey::Compound { set, .. } => set,
        }
    }
}

/// Parse a key, splitting on the first `delimiter`.
///
/// # Examples
///
/// ```
/// use keyedstore_core::key::{parse_key, ParsedKey};
///
/// assert_eq!(parse_key("title", '/'), ParsedKey::Simple("title"));
/// assert_eq!(
///     parse_key("created/timestamp", '/'),
///     ParsedKey::Compound { set: "created", item: "timestamp" },
/// );
/// ```
pub fn parse_key(key: &str, delimiter: char) -> ParsedKey<'_> {
    match key.split_once(delimiter) {
        Some((set, item)) => ParsedKey::Compound { set, item },
        None => ParsedKey::Simple(key),
    }
}
