//! Null-safe accessors over untyped engine JSON
//!
//! Paths are JSON Pointers (`/hits/hits`, `/suggest/addr/0/options`). Every
//! accessor returns a default instead of failing when any step of the path is
//! missing or has the wrong type.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Value at `path`, or `None`
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    value.pointer(path).filter(|v| !v.is_null())
}

/// Deserialize the value at `path`, falling back to `default`
pub fn get_or<T: DeserializeOwned>(value: &Value, path: &str, default: T) -> T {
    lookup(value, path)
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or(default)
}

/// Array at `path`, or an empty slice
pub fn array_at<'a>(value: &'a Value, path: &str) -> &'a [Value] {
    lookup(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// String at `path`
pub fn str_at<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    lookup(value, path).and_then(Value::as_str)
}

/// Number at `path` as f64
pub fn f64_at(value: &Value, path: &str) -> Option<f64> {
    lookup(value, path).and_then(Value::as_f64)
}
