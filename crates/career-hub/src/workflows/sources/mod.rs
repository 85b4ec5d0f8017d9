//! Lenient decoding of collections returned by the persistence API.
//!
//! Upstream endpoints answer with either a bare array or an object wrapping one
//! (`{"students": [...]}`, `{"data": [...]}`). Anything else is treated as an empty collection so
//! the filtering and pagination layers never see a missing list.

mod parser;

pub use parser::parse_date;
pub(crate) use parser::{empty_string_as_none, lenient_date, lenient_list, string_or_list};

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;
use tracing::warn;

const WRAPPER_KEYS: &[&str] = &["data", "items", "results"];

/// Unwrap a collection response into its elements.
///
/// `keys` are tried first (e.g. `["students"]`), then the generic wrapper keys, then the first
/// array-valued field of the object.
pub fn coerce_collection(value: Value, keys: &[&str]) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in keys.iter().chain(WRAPPER_KEYS) {
                if let Some(Value::Array(items)) = map.remove(*key) {
                    return items;
                }
            }

            map.into_iter()
                .find_map(|(_, value)| match value {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// Coerce then deserialize element-wise. Records that fail to decode are logged and skipped.
pub fn decode_collection<T>(value: Value, keys: &[&str]) -> Vec<T>
where
    T: DeserializeOwned,
{
    coerce_collection(value, keys)
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(index, error = %err, "skipping malformed record");
                None
            }
        })
        .collect()
}

/// Degrade a failed fetch to an empty collection, logging the failure.
pub fn or_empty<T, E>(result: Result<Vec<T>, E>, collection: &'static str) -> Vec<T>
where
    E: Display,
{
    match result {
        Ok(items) => items,
        Err(err) => {
            warn!(collection, error = %err, "collection fetch failed; continuing with empty list");
            Vec::new()
        }
    }
}
