// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, dotted-path access to hierarchical configuration and flat
//! environment secrets.
//!
//! This crate reads configuration from a YAML document or an in-memory
//! mapping and addresses it with dot-separated paths (`"database.host"`),
//! and reads secrets from environment variables by their literal names.
//! Both surfaces hand back the same [`ConfigValue`] wrapper, which carries
//! the raw datum together with its lookup key and converts it to primitive
//! types on demand.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: core types and lookup logic (`ConfigKey`,
//!   `SecretKey`, `RawValue`, `ConfigValue`, path resolution, errors)
//! - **Ports**: trait definitions (`ConfigSource`, `SecretSource`,
//!   `ConfigParser`)
//! - **Adapters**: source implementations (in-memory map, YAML document,
//!   process environment, in-memory environment mock)
//!
//! # Access semantics
//!
//! Every source exposes the same two-method contract: `get` returns a
//! `ConfigValue` whether or not the key exists, and `has` reports
//! existence. The value then offers two accessor families:
//!
//! - strict (`as_i32`, `as_bool`, ...): return `Err` for a missing key or
//!   an unconvertible type
//! - defaulted (`as_i32_or`, `as_bool_or`, ...): never fail; a missing key
//!   or an unconvertible type yields the supplied default
//!
//! # Feature Flags
//!
//! - `yaml`: enable the YAML document adapter (default)
//! - `env`: enable the process-environment adapter (default)
//!
//! # Quick Start
//!
//! ```rust
//! use dotcfg::prelude::*;
//!
//! # fn main() -> dotcfg::domain::Result<()> {
//! let config = YamlFileAdapter::from_yaml_str(
//!     "server:\n  host: 0.0.0.0\n  port: 3000",
//! )?;
//!
//! assert_eq!(config.get_str("server.host").as_string()?, "0.0.0.0");
//! assert_eq!(config.get_str("server.port").as_i32()?, 3000);
//! assert_eq!(config.get_str("server.tls").as_bool_or(false), false);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigValue, Mapping, RawValue, Result, SecretKey,
    };
    pub use crate::ports::{ConfigParser, ConfigSource, SecretSource};

    pub use crate::adapters::{EnvMapAdapter, MapAdapter};
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
