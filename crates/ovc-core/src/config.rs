//! Configuration structures for the option value codec.
//!
//! - [`DecodeConfig`] - Decoder limits
//! - [`CacheConfig`] - Existence index sizing
//! - [`OutputConfig`] - CLI output rendering
//! - [`Config`] - Root configuration combining all settings
//!
//! Every section uses `#[serde(default)]`, so a configuration file only needs
//! to name the values it overrides.

use std::fs;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain text, one result per line.
    #[default]
    Text,
    /// JSON document.
    Json,
}

/// Configuration for the trie decoder.
///
/// # Examples
///
/// ```
/// use ovc_core::DecodeConfig;
///
/// let config = DecodeConfig::default();
/// assert_eq!(config.max_combinations, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Upper bound on the number of combinations a single decode may emit.
    ///
    /// Ranges expand to one combination per value, so a short string such as
    /// `v1_0-4000000000` describes billions of combinations. `None` disables
    /// the check.
    pub max_combinations: Option<usize>,
}

/// Configuration for the combination existence index.
///
/// # Examples
///
/// ```
/// use ovc_core::CacheConfig;
///
/// assert_eq!(CacheConfig::default().initial_capacity, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of distinct encoded strings the memo map is sized for up front.
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
        }
    }
}

/// Configuration for rendering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format.
    pub format: OutputFormat,

    /// Whether JSON output is pretty-printed.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use ovc_core::Config;
///
/// let config: Config = serde_json::from_str(r#"{"decode": {"max_combinations": 1000}}"#)?;
/// assert_eq!(config.decode.max_combinations, Some(1000));
/// assert_eq!(config.cache.initial_capacity, 64);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Decoder configuration.
    pub decode: DecodeConfig,

    /// Existence index configuration.
    pub cache: CacheConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Loads and validates a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingFile`] if `path` does not exist
    /// - [`ConfigError::Io`] if the file cannot be read
    /// - [`ConfigError::Parse`] if the file is not valid configuration JSON
    /// - [`ConfigError::InvalidOption`] if a value fails [`validate`](Self::validate)
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_owned()));
        }

        let content = fs::read_to_string(path.as_std_path())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks option values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] when `decode.max_combinations`
    /// is `Some(0)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decode.max_combinations == Some(0) {
            return Err(ConfigError::InvalidOption {
                option: "decode.max_combinations".to_owned(),
                reason: "must be greater than zero (omit it for no limit)".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.decode.max_combinations, None);
        assert_eq!(config.cache.initial_capacity, 64);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"output": {"format": "json"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert_eq!(config.cache.initial_capacity, 64);
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut config = Config::default();
        config.decode.max_combinations = Some(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOption { .. })
        ));

        config.decode.max_combinations = Some(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = Config::from_json_file(Utf8Path::new("/definitely/not/here/ovc.json"));
        assert!(matches!(result, Err(ConfigError::MissingFile(_))));
    }

    #[test]
    fn test_output_format_serialization() {
        assert_eq!(
            serde_json::to_string(&OutputFormat::Text).unwrap(),
            r#""text""#
        );
        assert_eq!(
            serde_json::to_string(&OutputFormat::Json).unwrap(),
            r#""json""#
        );
    }
}
