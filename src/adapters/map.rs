// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory map configuration source adapter.

use crate::domain::{ConfigKey, ConfigValue, RawValue};
use crate::ports::ConfigSource;
use std::collections::HashMap;

/// Configuration source adapter backed by a caller-supplied map.
///
/// Keys are matched whole: `get` performs a direct lookup of the full key
/// string with no path splitting, so `"server.port"` is found only if the
/// map was populated with exactly that key.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::MapAdapter;
/// use dotcfg::domain::RawValue;
/// use dotcfg::ports::ConfigSource;
///
/// let adapter = MapAdapter::from_iter([
///     ("server.port", RawValue::Int(8080)),
///     ("debug", RawValue::Bool(true)),
/// ]);
///
/// assert_eq!(adapter.get_str("server.port").as_i32().unwrap(), 8080);
/// assert!(!adapter.get_str("server").is_found());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapAdapter {
    values: HashMap<ConfigKey, RawValue>,
}

impl MapAdapter {
    /// Creates a new adapter over the given map.
    pub fn new(values: HashMap<ConfigKey, RawValue>) -> Self {
        Self { values }
    }

    /// The number of keys in this adapter.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this adapter holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MapAdapter
where
    K: Into<ConfigKey>,
    V: Into<RawValue>,
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

impl ConfigSource for MapAdapter {
    fn name(&self) -> &str {
        "map"
    }

    fn get(&self, key: &ConfigKey) -> ConfigValue {
        match self.values.get(key) {
            Some(raw) => ConfigValue::new(key.as_str(), raw.clone()),
            None => ConfigValue::missing(key.as_str()),
        }
    }

    fn has(&self, key: &ConfigKey) -> bool {
        self.values.contains_key(key)
    }
}
