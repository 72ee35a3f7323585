//! JSON wire encoding for keyedstore values
//!
//! Special wrappers are used for non-JSON-native values:
//!
//! - `{"$bytes": "<base64>"}` for binary data
//! - `{"$f64": "NaN|+Inf|-Inf|-0.0"}` for special floats
//! - `{"$object": {...}}` for an object whose only key is one of these tags,
//!   so user data is never read back as a wrapper

mod decode;
mod encode;

pub use decode::{decode_json, from_json_value, DecodeError};
pub use encode::{encode_json, encode_json_pretty, to_json_value};

const BYTES_TAG: &str = "$bytes";
const F64_TAG: &str = "$f64";
const OBJECT_TAG: &str = "$object";
