//! Lenient lookups into a JSON parameter object.
//!
//! Parameters arrive as free-form JSON from the command line or a host page.
//! A missing key or a value of the wrong type is not an error: the caller
//! keeps its current setting.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Reads `params[name]` as a `T`.
///
/// Returns `None` if `params` is not an object, the key is missing, or the
/// value does not deserialize as `T` (so `-1` or `2.5` are rejected for
/// `usize`, while integers are accepted for `f64`).
pub fn param<T: DeserializeOwned>(params: &Value, name: &str) -> Option<T> {
    params.get(name).and_then(|v| T::deserialize(v).ok())
}

/// Keys of `params` that are not in `known`.
///
/// Empty when `params` is not an object.
pub fn unknown_keys(params: &Value, known: &[&str]) -> Vec<String> {
    params
        .as_object()
        .map(|obj| {
            obj.keys()
                .filter(|k| !known.contains(&k.as_str()))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
