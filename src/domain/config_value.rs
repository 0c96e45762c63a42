// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value wrapper with typed accessors.
//!
//! This module provides the `ConfigValue` type, which binds a raw datum to
//! the key it was looked up under and converts it to primitive types on
//! demand.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::raw_value::RawValue;

/// A typed view over one configuration lookup result.
///
/// A `ConfigValue` is created per `get` call by a source adapter and is
/// immutable afterwards: it holds the originating key, and either the raw
/// datum that was found or nothing at all. An explicitly stored null is
/// *found* (it carries [`RawValue::Null`]) but counts as empty.
///
/// Two accessor families extract primitives:
///
/// - strict accessors (`as_string`, `as_i32`, `as_i64`, `as_f64`,
///   `as_bool`) return [`ConfigError::ConfigKeyNotFound`] when the key was
///   absent and [`ConfigError::TypeMismatch`] when the datum cannot be
///   converted;
/// - defaulted accessors (`as_string_or`, `as_i32_or`, ...) never fail;
///   both conditions silently yield the supplied default.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::config_value::ConfigValue;
/// use dotcfg::domain::raw_value::RawValue;
///
/// let value = ConfigValue::new("server.port", RawValue::Int(3000));
/// assert_eq!(value.as_i32().unwrap(), 3000);
/// assert_eq!(value.as_string().unwrap(), "3000");
///
/// let missing = ConfigValue::missing("server.port");
/// assert!(missing.as_i32().is_err());
/// assert_eq!(missing.as_i32_or(8080), 8080);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigValue {
    key: String,
    raw: Option<RawValue>,
}

impl ConfigValue {
    /// Creates a found value binding `raw` to the key it was looked up under.
    pub fn new(key: impl Into<String>, raw: RawValue) -> Self {
        ConfigValue {
            key: key.into(),
            raw: Some(raw),
        }
    }

    /// Creates a not-found value for the given key.
    pub fn missing(key: impl Into<String>) -> Self {
        ConfigValue {
            key: key.into(),
            raw: None,
        }
    }

    /// The key this value was looked up under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw datum, or `None` if the key was not found.
    pub fn raw(&self) -> Option<&RawValue> {
        self.raw.as_ref()
    }

    /// Whether the lookup found a value (including an explicit null).
    pub fn is_found(&self) -> bool {
        self.raw.is_some()
    }

    /// Whether the value is absent, an explicit null, or an empty string.
    ///
    /// Numeric zero and `false` are meaningful values and are not empty.
    pub fn is_empty(&self) -> bool {
        match &self.raw {
            None | Some(RawValue::Null) => true,
            Some(RawValue::String(s)) => s.is_empty(),
            Some(_) => false,
        }
    }

    /// Returns the value rendered as a string.
    ///
    /// Strings are returned verbatim; any other found value falls back to
    /// its textual rendering (so an integer `42` yields `"42"`). The only
    /// failure mode is a missing key.
    pub fn as_string(&self) -> Result<String> {
        Ok(self.require()?.to_string())
    }

    /// Returns the value as an `i32`.
    ///
    /// Accepts integer and float data; floats truncate toward zero.
    pub fn as_i32(&self) -> Result<i32> {
        match self.require()? {
            RawValue::Int(n) => Ok(*n as i32),
            RawValue::Float(x) => Ok(*x as i32),
            other => Err(self.mismatch("i32", other)),
        }
    }

    /// Returns the value as an `i64`.
    ///
    /// Accepts integer and float data; floats truncate toward zero.
    pub fn as_i64(&self) -> Result<i64> {
        match self.require()? {
            RawValue::Int(n) => Ok(*n),
            RawValue::Float(x) => Ok(*x as i64),
            other => Err(self.mismatch("i64", other)),
        }
    }

    /// Returns the value as an `f64`, widening integer data.
    pub fn as_f64(&self) -> Result<f64> {
        match self.require()? {
            RawValue::Int(n) => Ok(*n as f64),
            RawValue::Float(x) => Ok(*x),
            other => Err(self.mismatch("f64", other)),
        }
    }

    /// Returns the value as a `bool`.
    ///
    /// Only boolean data is accepted; there is no truthy coercion from
    /// numbers or strings.
    pub fn as_bool(&self) -> Result<bool> {
        match self.require()? {
            RawValue::Bool(b) => Ok(*b),
            other => Err(self.mismatch("bool", other)),
        }
    }

    /// Like [`as_string`](Self::as_string), but returns `default` when the
    /// key was not found.
    pub fn as_string_or(&self, default: &str) -> String {
        self.as_string().unwrap_or_else(|_| default.to_string())
    }

    /// Like [`as_i32`](Self::as_i32), but returns `default` when the key
    /// was not found or the value is not convertible.
    pub fn as_i32_or(&self, default: i32) -> i32 {
        self.as_i32().unwrap_or(default)
    }

    /// Like [`as_i64`](Self::as_i64), but returns `default` when the key
    /// was not found or the value is not convertible.
    pub fn as_i64_or(&self, default: i64) -> i64 {
        self.as_i64().unwrap_or(default)
    }

    /// Like [`as_f64`](Self::as_f64), but returns `default` when the key
    /// was not found or the value is not convertible.
    pub fn as_f64_or(&self, default: f64) -> f64 {
        self.as_f64().unwrap_or(default)
    }

    /// Like [`as_bool`](Self::as_bool), but returns `default` when the key
    /// was not found or the value is not a boolean.
    pub fn as_bool_or(&self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }

    fn require(&self) -> Result<&RawValue> {
        self.raw.as_ref().ok_or_else(|| ConfigError::ConfigKeyNotFound {
            key: self.key.clone(),
        })
    }

    fn mismatch(&self, target_type: &'static str, actual: &RawValue) -> ConfigError {
        ConfigError::TypeMismatch {
            key: self.key.clone(),
            target_type,
            actual_type: actual.type_name(),
        }
    }
}
