// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for dotted-path lookups.

use std::fmt;
use std::str::Split;

/// A dot-separated configuration path such as `"database.host"`.
///
/// A key is decomposed into path segments by naive splitting on `.`; there
/// is no escaping for literal dots. A leading, trailing, or doubled dot
/// produces an empty segment, and the empty key produces exactly one empty
/// segment; in both cases lookup proceeds with a literal `""` key rather
/// than rejecting or collapsing the segment.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("database.host");
/// assert_eq!(key.as_str(), "database.host");
/// assert_eq!(key.segments().collect::<Vec<_>>(), ["database", "host"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Iterates over the path segments of this key, in order.
    ///
    /// Splitting never yields zero segments: the empty key yields a single
    /// `""` segment.
    pub fn segments(&self) -> Split<'_, char> {
        self.0.split('.')
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_key_new() {
        let key = ConfigKey::new("test.key".to_string());
        assert_eq!(key.as_str(), "test.key");
    }

    #[test]
    fn test_config_key_from_str_and_string() {
        assert_eq!(ConfigKey::from("test.key").as_str(), "test.key");
        assert_eq!(ConfigKey::from("test.key".to_string()).as_str(), "test.key");
    }

    #[test]
    fn test_config_key_into_string() {
        let key = ConfigKey::from("test.key");
        assert_eq!(key.into_string(), "test.key");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("test.key");
        assert_eq!(format!("{}", key), "test.key");
    }

    #[test]
    fn test_segments_simple() {
        let key = ConfigKey::from("database.connection.host");
        let segments: Vec<&str> = key.segments().collect();
        assert_eq!(segments, ["database", "connection", "host"]);
    }

    #[test]
    fn test_segments_single() {
        let key = ConfigKey::from("debug");
        assert_eq!(key.segments().collect::<Vec<_>>(), ["debug"]);
    }

    #[test]
    fn test_segments_empty_key() {
        let key = ConfigKey::from("");
        assert_eq!(key.segments().collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn test_segments_trailing_dot() {
        let key = ConfigKey::from("server.");
        assert_eq!(key.segments().collect::<Vec<_>>(), ["server", ""]);
    }

    #[test]
    fn test_segments_leading_dot() {
        let key = ConfigKey::from(".server");
        assert_eq!(key.segments().collect::<Vec<_>>(), ["", "server"]);
    }

    #[test]
    fn test_segments_double_dot() {
        let key = ConfigKey::from("a..b");
        assert_eq!(key.segments().collect::<Vec<_>>(), ["a", "", "b"]);
    }

    #[test]
    fn test_config_key_as_hash_map_key() {
        let mut map = HashMap::new();
        map.insert(ConfigKey::from("test.key"), "value1");

        assert_eq!(map.get(&ConfigKey::from("test.key")), Some(&"value1"));
        assert_eq!(map.get(&ConfigKey::from("other.key")), None);
    }

    #[test]
    fn test_config_key_equality_and_clone() {
        let key1 = ConfigKey::from("test.key");
        let key2 = key1.clone();
        assert_eq!(key1, key2);
        assert_ne!(key1, ConfigKey::from("other.key"));
    }
}
