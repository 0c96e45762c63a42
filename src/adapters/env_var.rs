// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment secret source adapter.
//!
//! This module provides an adapter that reads secrets from the live
//! process environment.

use crate::domain::{ConfigValue, RawValue, SecretKey};
use crate::ports::SecretSource;
use std::env;

/// Secret source adapter over the process environment.
///
/// Every `get` performs a fresh lookup by the literal variable name; no
/// prefixing, case mapping, caching, or dot-splitting is applied. Values
/// are always string data. A variable whose value is not valid Unicode is
/// treated as absent, by both `get` and `has`.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::EnvVarAdapter;
/// use dotcfg::ports::SecretSource;
///
/// let secrets = EnvVarAdapter::new();
/// let home = secrets.get_str("HOME").as_string_or("/");
/// # let _ = home;
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvVarAdapter;

impl EnvVarAdapter {
    /// Creates a new process-environment adapter.
    pub fn new() -> Self {
        EnvVarAdapter
    }
}

impl SecretSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &SecretKey) -> ConfigValue {
        match env::var(key.as_str()) {
            Ok(value) => ConfigValue::new(key.as_str(), RawValue::String(value)),
            Err(_) => ConfigValue::missing(key.as_str()),
        }
    }

    fn has(&self, key: &SecretKey) -> bool {
        env::var(key.as_str()).is_ok()
    }
}
