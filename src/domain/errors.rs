// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when loading
//! configuration documents or converting values. All errors use `thiserror`
//! for proper error handling and conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// Load failures (`SourceError`, `ParseError`, `IoError`) are returned at
/// construction of a document-backed source and are recoverable by the
/// caller. `ConfigKeyNotFound` and `TypeMismatch` are returned by the
/// strict accessor family on [`ConfigValue`](crate::domain::ConfigValue);
/// callers who want graceful degradation use the defaulted accessors,
/// which never produce either. The enum is `#[non_exhaustive]` to allow
/// future additions without breaking backwards compatibility.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A strict accessor was invoked on a value whose key was not found.
    #[error("configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found.
        key: String,
    },

    /// A strict accessor was invoked on a value whose dynamic type is not
    /// convertible to the requested type.
    #[error("cannot convert value for key '{key}' to {target_type}: found {actual_type}")]
    TypeMismatch {
        /// The key whose value failed to convert.
        key: String,
        /// The requested type.
        target_type: &'static str,
        /// The dynamic type of the stored value.
        actual_type: &'static str,
    },

    /// An error occurred in a configuration source.
    #[error("configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error.
        source_name: String,
        /// The error message.
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration document.
    #[error("failed to parse configuration: {message}")]
    ParseError {
        /// The error message.
        message: String,
        /// The underlying parsing error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
