// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source trait definitions.
//!
//! This module defines the two capability traits implemented by source
//! adapters: `ConfigSource` for dotted-path configuration data and
//! `SecretSource` for flat environment-style secrets. The two traits have
//! the same shape but distinct key types, so a dotted path can never be
//! handed to a flat source by accident.

use crate::domain::{ConfigKey, ConfigValue, SecretKey};

/// A source of dotted-path configuration data.
///
/// `get` is total: absence is expressed through the returned value's found
/// flag, never through an error. Implementations must keep `get` and `has`
/// in agreement: for every key, `has(key)` equals
/// `get(key).is_found()` at any given point in time.
///
/// Implementations must be `Send + Sync`; a constructed source is queried
/// read-only and may be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use dotcfg::domain::{ConfigKey, ConfigValue, RawValue};
/// use dotcfg::ports::ConfigSource;
///
/// struct Fixed;
///
/// impl ConfigSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get(&self, key: &ConfigKey) -> ConfigValue {
///         if key.as_str() == "app.name" {
///             ConfigValue::new(key.as_str(), RawValue::from("demo"))
///         } else {
///             ConfigValue::missing(key.as_str())
///         }
///     }
///
///     fn has(&self, key: &ConfigKey) -> bool {
///         key.as_str() == "app.name"
///     }
/// }
///
/// let source = Fixed;
/// assert_eq!(source.get_str("app.name").as_string().unwrap(), "demo");
/// assert!(!source.has(&ConfigKey::from("app.version")));
/// ```
pub trait ConfigSource: Send + Sync {
    /// A short identifier for this source, used in logging and errors.
    fn name(&self) -> &str;

    /// Looks up a configuration value for the given key.
    ///
    /// Returns a found value when the key resolves, and a not-found value
    /// (whose strict accessors fail and whose defaulted accessors yield
    /// their defaults) otherwise.
    fn get(&self, key: &ConfigKey) -> ConfigValue;

    /// Reports whether the key resolves in this source.
    fn has(&self, key: &ConfigKey) -> bool;

    /// Convenience for `get(&ConfigKey::from(key))`.
    fn get_str(&self, key: &str) -> ConfigValue {
        self.get(&ConfigKey::from(key))
    }
}

/// A source of flat, environment-style secrets.
///
/// The same two-method contract as [`ConfigSource`], but addressed by
/// opaque [`SecretKey`]s that are never dot-decomposed.
pub trait SecretSource: Send + Sync {
    /// A short identifier for this source, used in logging and errors.
    fn name(&self) -> &str;

    /// Looks up a secret value for the given variable name.
    fn get(&self, key: &SecretKey) -> ConfigValue;

    /// Reports whether the variable exists in this source.
    fn has(&self, key: &SecretKey) -> bool;

    /// Convenience for `get(&SecretKey::from(key))`.
    fn get_str(&self, key: &str) -> ConfigValue {
        self.get(&SecretKey::from(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawValue;

    struct TestSource;

    impl ConfigSource for TestSource {
        fn name(&self) -> &str {
            "test-source"
        }

        fn get(&self, key: &ConfigKey) -> ConfigValue {
            if key.as_str() == "present" {
                ConfigValue::new(key.as_str(), RawValue::Int(1))
            } else {
                ConfigValue::missing(key.as_str())
            }
        }

        fn has(&self, key: &ConfigKey) -> bool {
            self.get(key).is_found()
        }
    }

    struct TestSecrets;

    impl SecretSource for TestSecrets {
        fn name(&self) -> &str {
            "test-secrets"
        }

        fn get(&self, key: &SecretKey) -> ConfigValue {
            ConfigValue::missing(key.as_str())
        }

        fn has(&self, _key: &SecretKey) -> bool {
            false
        }
    }

    #[test]
    fn test_get_and_has_agree() {
        let source = TestSource;
        for key in ["present", "absent"] {
            let key = ConfigKey::from(key);
            assert_eq!(source.has(&key), source.get(&key).is_found());
        }
    }

    #[test]
    fn test_get_str_convenience() {
        let source = TestSource;
        assert!(source.get_str("present").is_found());
        assert!(!source.get_str("absent").is_found());
    }

    #[test]
    fn test_secret_get_str_convenience() {
        let secrets = TestSecrets;
        assert!(!secrets.get_str("ANY").is_found());
        assert_eq!(secrets.name(), "test-secrets");
    }

    #[test]
    fn test_sources_are_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<Box<dyn ConfigSource>>();
        assert_send_sync::<Box<dyn SecretSource>>();

        let boxed: Box<dyn ConfigSource> = Box::new(TestSource);
        assert_eq!(boxed.name(), "test-source");
    }
}
