// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document configuration source adapter.
//!
//! This module provides the parser that decodes YAML text into the nested
//! [`Mapping`] tree, and the adapter that answers dotted-path lookups over
//! a parsed document.

use crate::domain::{path, ConfigError, ConfigKey, ConfigValue, Mapping, RawValue, Result};
use crate::ports::{ConfigParser, ConfigSource};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for YAML configuration files (10MB).
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// YAML parser implementation.
///
/// Decodes YAML text into a [`Mapping`] tree, preserving the document's
/// nesting. The document root must be a mapping; an empty or null document
/// decodes to an empty tree. Mapping entries whose keys are not strings
/// are skipped.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::YamlParser;
/// use dotcfg::domain::RawValue;
/// use dotcfg::ports::ConfigParser;
///
/// let tree = YamlParser::new()
///     .parse("database:\n  host: localhost\n  port: 5432")
///     .unwrap();
/// let database = tree.get("database").and_then(|v| v.as_mapping()).unwrap();
/// assert_eq!(database.get("port"), Some(&RawValue::Int(5432)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a decoded YAML value into the crate's raw value variant.
    fn convert(value: serde_yaml::Value) -> RawValue {
        match value {
            serde_yaml::Value::Null => RawValue::Null,
            serde_yaml::Value::Bool(b) => RawValue::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawValue::Int(i)
                } else {
                    // u64 beyond i64::MAX or a float; both fit the float case
                    RawValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_yaml::Value::String(s) => RawValue::String(s),
            serde_yaml::Value::Sequence(seq) => {
                RawValue::Sequence(seq.into_iter().map(Self::convert).collect())
            }
            serde_yaml::Value::Mapping(map) => {
                let mut tree = Mapping::new();
                for (key, val) in map {
                    if let Some(key_str) = key.as_str() {
                        tree.insert(key_str.to_string(), Self::convert(val));
                    }
                }
                RawValue::Mapping(tree)
            }
            serde_yaml::Value::Tagged(tagged) => Self::convert(tagged.value),
        }
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Mapping> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match Self::convert(value) {
            RawValue::Null => Ok(Mapping::new()),
            RawValue::Mapping(tree) => Ok(tree),
            other => Err(ConfigError::ParseError {
                message: format!("document root must be a mapping, found {}", other.type_name()),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Configuration source adapter for YAML documents.
///
/// The document is read and parsed once, at construction; every `get`
/// afterwards resolves its dotted key against the parsed tree without
/// touching the file again. Construction is the only fallible step.
///
/// # Examples
///
/// ```rust,no_run
/// use dotcfg::adapters::YamlFileAdapter;
/// use dotcfg::ports::ConfigSource;
///
/// let config = YamlFileAdapter::from_file("/etc/myapp/config.yaml").unwrap();
/// let host = config.get_str("database.host").as_string_or("localhost");
/// # let _ = host;
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Path the document was loaded from, if it came from a file.
    file_path: Option<PathBuf>,
    /// The parsed document tree.
    tree: Mapping,
}

impl YamlFileAdapter {
    /// Creates an adapter by reading and parsing a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::SourceError`] when the file is
    /// inaccessible or oversized, and a [`ConfigError::ParseError`] when
    /// its content is not a valid YAML mapping.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        // Canonicalize to resolve symlinks and relative components
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: format!(
                    "invalid or inaccessible path: {}",
                    file_path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("<unknown>")
                ),
                source: Some(Box::new(e)),
            })?;

        let metadata = fs::metadata(&canonical_path).map_err(|e| ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!("failed to read file metadata: {}", canonical_path.display()),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: format!(
                    "configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
                source: None,
            });
        }

        let content =
            fs::read_to_string(&canonical_path).map_err(|e| ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: format!(
                    "failed to read configuration file: {}",
                    canonical_path.display()
                ),
                source: Some(Box::new(e)),
            })?;

        let tree = YamlParser::new().parse(&content)?;

        tracing::debug!(
            "loaded {} top-level keys from {}",
            tree.len(),
            canonical_path.display()
        );

        Ok(Self {
            file_path: Some(canonical_path),
            tree,
        })
    }

    /// Creates an adapter from an in-memory YAML document.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::ParseError`] when the content is not a
    /// valid YAML mapping.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let tree = YamlParser::new().parse(content)?;
        Ok(Self {
            file_path: None,
            tree,
        })
    }

    /// Creates an adapter from `config.yaml` in the OS-appropriate
    /// configuration directory for the given application.
    ///
    /// # Errors
    ///
    /// Fails when the configuration directory cannot be determined, or
    /// with the same errors as [`from_file`](Self::from_file).
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: "failed to determine project directories".to_string(),
                source: None,
            })?;

        let config_file = proj_dirs.config_dir().join("config.yaml");
        Self::from_file(config_file)
    }

    /// The path the document was loaded from, when it came from a file.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// The parsed document tree.
    pub fn tree(&self) -> &Mapping {
        &self.tree
    }
}

impl ConfigSource for YamlFileAdapter {
    fn name(&self) -> &str {
        "yaml-file"
    }

    fn get(&self, key: &ConfigKey) -> ConfigValue {
        match path::resolve(&self.tree, key) {
            Some(raw) => ConfigValue::new(key.as_str(), raw.clone()),
            None => ConfigValue::missing(key.as_str()),
        }
    }

    fn has(&self, key: &ConfigKey) -> bool {
        path::resolve(&self.tree, key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_parser_simple() {
        let tree = YamlParser::new().parse("key: value").unwrap();
        assert_eq!(tree.get("key"), Some(&RawValue::from("value")));
    }

    #[test]
    fn test_yaml_parser_scalar_types() {
        let yaml = r#"
string_value: hello
int_value: 42
float_value: 1.5
bool_value: true
null_value: null
"#;
        let tree = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(tree.get("string_value"), Some(&RawValue::from("hello")));
        assert_eq!(tree.get("int_value"), Some(&RawValue::Int(42)));
        assert_eq!(tree.get("float_value"), Some(&RawValue::Float(1.5)));
        assert_eq!(tree.get("bool_value"), Some(&RawValue::Bool(true)));
        assert_eq!(tree.get("null_value"), Some(&RawValue::Null));
    }

    #[test]
    fn test_yaml_parser_keeps_nesting() {
        let yaml = r#"
app:
  database:
    connection:
      host: localhost
"#;
        let tree = YamlParser::new().parse(yaml).unwrap();
        let host = path::resolve(&tree, &ConfigKey::from("app.database.connection.host"));
        assert_eq!(host, Some(&RawValue::from("localhost")));
    }

    #[test]
    fn test_yaml_parser_sequences_are_opaque() {
        let yaml = "servers:\n  - server1\n  - server2";
        let tree = YamlParser::new().parse(yaml).unwrap();

        match tree.get("servers") {
            Some(RawValue::Sequence(values)) => assert_eq!(values.len(), 2),
            other => panic!("expected sequence, got {:?}", other),
        }
        // No index addressing through sequences.
        assert_eq!(path::resolve(&tree, &ConfigKey::from("servers.0")), None);
    }

    #[test]
    fn test_yaml_parser_empty_document() {
        assert!(YamlParser::new().parse("").unwrap().is_empty());
        assert!(YamlParser::new().parse("null").unwrap().is_empty());
    }

    #[test]
    fn test_yaml_parser_non_mapping_root() {
        let result = YamlParser::new().parse("- a\n- b");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));

        let result = YamlParser::new().parse("42");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_parser_invalid() {
        let result = YamlParser::new().parse("invalid: yaml: content:");
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_parser_supported_extensions() {
        let parser = YamlParser::new();
        let extensions = parser.supported_extensions();
        assert_eq!(extensions, &["yaml", "yml"]);
    }

    #[test]
    fn test_adapter_from_yaml_str() {
        let adapter = YamlFileAdapter::from_yaml_str(
            "server:\n  host: \"0.0.0.0\"\n  port: 3000\ndatabase:\n  ssl: true\n  ratio: 1.5",
        )
        .unwrap();

        assert_eq!(adapter.get_str("server.host").as_string().unwrap(), "0.0.0.0");
        assert_eq!(adapter.get_str("server.port").as_i32().unwrap(), 3000);
        assert!(adapter.get_str("database.ssl").as_bool().unwrap());
        assert_eq!(adapter.get_str("database.ratio").as_f64().unwrap(), 1.5);
        assert!(adapter.file_path().is_none());
    }

    #[test]
    fn test_adapter_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "database:\n  host: localhost\n  port: 5432").unwrap();

        let adapter = YamlFileAdapter::from_file(temp_file.path()).unwrap();
        assert_eq!(adapter.name(), "yaml-file");
        assert!(adapter.file_path().is_some());
        assert_eq!(
            adapter.get_str("database.host").as_string().unwrap(),
            "localhost"
        );
    }

    #[test]
    fn test_adapter_nonexistent_file() {
        let result = YamlFileAdapter::from_file("/nonexistent/path/to/config.yaml");
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    fn test_adapter_has_and_get_agree() {
        let adapter =
            YamlFileAdapter::from_yaml_str("server:\n  port: 3000\nempty: null").unwrap();
        for key in ["server", "server.port", "server.missing", "empty", "nope"] {
            let key = ConfigKey::from(key);
            assert_eq!(adapter.has(&key), adapter.get(&key).is_found(), "{}", key);
        }
    }

    #[test]
    fn test_adapter_subtree_lookup() {
        let adapter = YamlFileAdapter::from_yaml_str("server:\n  port: 3000").unwrap();
        let server = adapter.get_str("server");
        assert!(server.is_found());
        assert_eq!(server.raw().and_then(|r| r.as_mapping()).map(|m| m.len()), Some(1));
    }

    #[test]
    fn test_adapter_explicit_null_is_found_and_empty() {
        let adapter = YamlFileAdapter::from_yaml_str("feature:\n  flag: null").unwrap();
        let value = adapter.get_str("feature.flag");
        assert!(value.is_found());
        assert!(value.is_empty());
        assert_eq!(value.as_string().unwrap(), "");
        assert!(value.as_bool().is_err());
    }

    #[test]
    fn test_adapter_scalar_mid_path() {
        let adapter = YamlFileAdapter::from_yaml_str("debug: true").unwrap();
        assert!(!adapter.get_str("debug.nested").is_found());
    }

    #[test]
    fn test_adapter_non_string_keys_skipped() {
        let adapter = YamlFileAdapter::from_yaml_str("1: one\nname: demo").unwrap();
        assert!(!adapter.get_str("1").is_found());
        assert!(adapter.get_str("name").is_found());
    }
}
