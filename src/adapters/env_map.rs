// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory environment-style secret source adapter.

use crate::domain::{ConfigValue, RawValue, SecretKey};
use crate::ports::SecretSource;
use std::collections::HashMap;

/// Secret source adapter backed by an explicit in-memory mapping.
///
/// Behaves exactly like
/// [`EnvVarAdapter`](crate::adapters::env_var::EnvVarAdapter) but reads
/// from a caller-supplied map instead of the real process environment.
/// Intended for tests and other scenarios where touching process state is
/// undesirable.
#[derive(Debug, Clone, Default)]
pub struct EnvMapAdapter {
    values: HashMap<String, String>,
}

impl EnvMapAdapter {
    /// Creates a new adapter over the given variable map.
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for EnvMapAdapter
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SecretSource for EnvMapAdapter {
    fn name(&self) -> &str {
        "env-map"
    }

    fn get(&self, key: &SecretKey) -> ConfigValue {
        match self.values.get(key.as_str()) {
            Some(value) => ConfigValue::new(key.as_str(), RawValue::String(value.clone())),
            None => ConfigValue::missing(key.as_str()),
        }
    }

    fn has(&self, key: &SecretKey) -> bool {
        self.values.contains_key(key.as_str())
    }
}
