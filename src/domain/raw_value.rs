// SPDX-License-Identifier: MIT OR Apache-2.0

//! The raw configuration datum as decoded from a document.
//!
//! This module provides [`RawValue`], the closed set of shapes a decoded
//! configuration value can take, and the [`Mapping`] alias for the nested
//! tree that path lookups walk.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A nested, string-keyed mapping of raw values.
///
/// This is the tree shape that dotted-path resolution walks; it appears
/// both as the root of a parsed document and as interior nodes.
pub type Mapping = BTreeMap<String, RawValue>;

/// A single raw configuration datum.
///
/// Scalars are leaves. Mappings appear as interior nodes of the tree but
/// are also valid terminal lookup results: a path may stop on a whole
/// sub-tree. Sequences are opaque: path resolution never descends into
/// them, and they convert to nothing except their textual rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// An explicit null literal.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar. All integer widths decode to `i64`.
    Int(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A string scalar.
    String(String),
    /// A sequence of values.
    Sequence(Vec<RawValue>),
    /// A nested string-keyed mapping.
    Mapping(Mapping),
}

impl RawValue {
    /// The name of this value's dynamic shape, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "boolean",
            RawValue::Int(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::String(_) => "string",
            RawValue::Sequence(_) => "sequence",
            RawValue::Mapping(_) => "mapping",
        }
    }

    /// Returns the nested mapping if this value is one.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            RawValue::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

/// Renders the value as text: strings verbatim, numbers and booleans via
/// their standard formatting, null as the empty string, mappings as
/// `{key: value, ...}` in key order, and sequences as `[a, b, ...]`.
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => Ok(()),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Int(n) => write!(f, "{}", n),
            RawValue::Float(x) => write!(f, "{}", x),
            RawValue::String(s) => f.write_str(s),
            RawValue::Sequence(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            RawValue::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Int(i64::from(n))
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Int(n)
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        RawValue::Float(x)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::String(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::String(s)
    }
}
