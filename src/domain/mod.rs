// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and lookup logic.
//!
//! This module contains the fundamental concepts used throughout the
//! library: keys, the raw value variant, the typed value wrapper, dotted-
//! path resolution, and errors. It is independent of any external concerns.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod path;
pub mod raw_value;
pub mod secret_key;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use raw_value::{Mapping, RawValue};
pub use secret_key::SecretKey;
