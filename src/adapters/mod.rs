// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration and secret source implementations.
//!
//! This module contains concrete implementations of the source traits
//! defined in the ports layer. Each adapter implements `ConfigSource` or
//! `SecretSource` to provide values from a specific source.

pub mod env_map;
#[cfg(feature = "env")]
pub mod env_var;
pub mod map;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
pub use env_map::EnvMapAdapter;
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
pub use map::MapAdapter;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};
