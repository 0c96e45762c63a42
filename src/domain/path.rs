// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted-path resolution over a nested mapping.

use crate::domain::config_key::ConfigKey;
use crate::domain::raw_value::{Mapping, RawValue};

/// Resolves a dotted key against a nested mapping, returning a reference
/// to the terminal value or `None` if resolution fails.
///
/// The walk advances one segment at a time from the root: while segments
/// remain, the cursor must be a mapping that contains the segment as a
/// literal key. A mid-path scalar or sequence terminates the walk early.
/// The value under the final segment is returned as-is, so a path may
/// stop on a whole sub-mapping. Empty segments (from a leading, trailing,
/// or doubled dot, or the empty key) look up the literal `""` key.
///
/// The tree is never mutated.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::config_key::ConfigKey;
/// use dotcfg::domain::path::resolve;
/// use dotcfg::domain::raw_value::{Mapping, RawValue};
///
/// let tree = Mapping::from([(
///     "server".to_string(),
///     RawValue::Mapping(Mapping::from([(
///         "port".to_string(),
///         RawValue::Int(3000),
///     )])),
/// )]);
///
/// let value = resolve(&tree, &ConfigKey::from("server.port"));
/// assert_eq!(value, Some(&RawValue::Int(3000)));
/// assert_eq!(resolve(&tree, &ConfigKey::from("server.missing")), None);
/// ```
pub fn resolve<'a>(tree: &'a Mapping, key: &ConfigKey) -> Option<&'a RawValue> {
    let mut map = tree;
    let mut segments = key.segments().peekable();
    loop {
        // segments() yields at least one segment for any key
        let segment = segments.next()?;
        let value = map.get(segment)?;
        if segments.peek().is_none() {
            return Some(value);
        }
        map = value.as_mapping()?;
    }
}
