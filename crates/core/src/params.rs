//! Helpers for extracting typed parameters from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. A missing key
//! yields the default. A key that is present with the wrong type or an
//! out-of-range value is an error, so a typo in a config file never turns
//! into a silent fallback.

use crate::error::BoidsError;
use serde_json::Value;

fn invalid(name: &str, value: &Value, expected: &str) -> BoidsError {
    BoidsError::InvalidParameter {
        name: name.to_string(),
        message: format!("expected {expected}, got {value}"),
    }
}

/// Extracts an `f64` from `params[name]`, accepting integers too.
pub fn param_f64(params: &Value, name: &str, default: f64) -> Result<f64, BoidsError> {
    match params.get(name) {
        None => Ok(default),
        Some(v) => v.as_f64().ok_or_else(|| invalid(name, v, "a number")),
    }
}

/// Extracts a `usize` from `params[name]`.
///
/// Only non-negative integers are accepted.
pub fn param_usize(params: &Value, name: &str, default: usize) -> Result<usize, BoidsError> {
    match params.get(name) {
        None => Ok(default),
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| invalid(name, v, "a non-negative integer")),
    }
}

/// Extracts an optional `u64` from `params[name]`; absent or null gives `None`.
pub fn param_opt_u64(params: &Value, name: &str) -> Result<Option<u64>, BoidsError> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .map(Some)
            .ok_or_else(|| invalid(name, v, "a non-negative integer or null")),
    }
}
