// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `ConfigParser` trait, the interface for turning
//! the raw text of a configuration document into the nested mapping that
//! dotted-path resolution walks.

use crate::domain::{Mapping, Result};

/// A trait for parsing configuration documents.
///
/// Parsers keep the document's nesting intact: the result is a tree of
/// [`RawValue`](crate::domain::RawValue)s rooted in a string-keyed
/// mapping, not a flattened key list. A document whose root is not a
/// mapping is a parse error.
pub trait ConfigParser {
    /// Parses document content into a nested mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`](crate::domain::ConfigError) when
    /// the content is not valid in the parser's format or its root is not
    /// a mapping.
    fn parse(&self, content: &str) -> Result<Mapping>;

    /// The file extensions (without the leading dot) this parser handles.
    fn supported_extensions(&self) -> &[&str];
}
