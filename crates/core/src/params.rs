//! Helpers for reading typed parameters out of a `serde_json::Value` object
//! and for validating numeric parameter domains.
//!
//! The `param_*` readers return `default` only when the key is absent. A key
//! that is present with a value of the wrong JSON type is an
//! [`EngineError::InvalidConfig`]; it never silently falls back.

use crate::error::EngineError;
use serde_json::Value;

fn wrong_type(name: &str, expected: &str, got: &Value) -> EngineError {
    EngineError::invalid_config(name, format!("expected {expected}, got {got}"))
}

/// Extracts an `f64` from `params[name]`, or `default` if the key is absent.
///
/// JSON integers are accepted and converted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> Result<f64, EngineError> {
    match params.get(name) {
        None => Ok(default),
        Some(v) => v.as_f64().ok_or_else(|| wrong_type(name, "a number", v)),
    }
}

/// Extracts a `usize` from `params[name]`, or `default` if the key is absent.
///
/// Accepts non-negative integers, including integral floats such as `650.0`
/// that slider widgets tend to emit. Negative or fractional values are errors.
pub fn param_usize(params: &Value, name: &str, default: usize) -> Result<usize, EngineError> {
    let Some(v) = params.get(name) else {
        return Ok(default);
    };
    v.as_u64()
        .or_else(|| {
            v.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| wrong_type(name, "a non-negative integer", v))
}

/// Extracts a `bool` from `params[name]`, or `default` if the key is absent.
pub fn param_bool(params: &Value, name: &str, default: bool) -> Result<bool, EngineError> {
    match params.get(name) {
        None => Ok(default),
        Some(v) => v.as_bool().ok_or_else(|| wrong_type(name, "a boolean", v)),
    }
}

/// Extracts a `String` from `params[name]`, or `default` if the key is absent.
pub fn param_string(params: &Value, name: &str, default: &str) -> Result<String, EngineError> {
    match params.get(name) {
        None => Ok(default.to_owned()),
        Some(v) => v
            .as_str()
            .map(String::from)
            .ok_or_else(|| wrong_type(name, "a string", v)),
    }
}

/// Rejects NaN and infinities.
pub fn ensure_finite(name: &str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::invalid_config(name, format!("{value} is not finite")))
    }
}

/// Requires a finite value strictly greater than zero.
pub fn ensure_positive(name: &str, value: f64) -> Result<f64, EngineError> {
    match ensure_finite(name, value)? {
        v if v > 0.0 => Ok(v),
        v => Err(EngineError::invalid_config(name, format!("{v} must be > 0"))),
    }
}

/// Requires a finite value greater than or equal to zero.
pub fn ensure_non_negative(name: &str, value: f64) -> Result<f64, EngineError> {
    match ensure_finite(name, value)? {
        v if v >= 0.0 => Ok(v),
        v => Err(EngineError::invalid_config(name, format!("{v} must be >= 0"))),
    }
}
