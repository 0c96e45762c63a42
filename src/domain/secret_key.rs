// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret key newtype for environment-variable lookups.

use std::fmt;

/// The name of an environment variable, such as `"DATABASE_PASSWORD"`.
///
/// Unlike [`ConfigKey`](crate::domain::ConfigKey), a `SecretKey` is an
/// opaque flat string: it is never decomposed into dotted path segments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new `SecretKey` from a `String`.
    pub fn new(key: String) -> Self {
        SecretKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `SecretKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for SecretKey {
    fn from(s: String) -> Self {
        SecretKey(s)
    }
}

impl From<&str> for SecretKey {
    fn from(s: &str) -> Self {
        SecretKey(s.to_string())
    }
}

impl From<SecretKey> for String {
    fn from(key: SecretKey) -> Self {
        key.0
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
