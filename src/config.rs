//! # Configuration Management
//!
//! Centralized configuration for the packet reader.
//!
//! This module provides structured configuration for decoding limits, the text
//! encoding used by string fields, and logging output.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides via `from_env()`
//!
//! ## Example
//! ```toml
//! [decoder]
//! # optional; strings are unbounded when omitted
//! max_string_length = 5000
//! charset = "cp1252"
//!
//! [logging]
//! app_name = "game-packet-reader"
//! log_level = "info"
//! json_format = false
//! with_target = true
//! ```

use crate::core::charset::StringCharset;
use crate::error::{DecodeError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Hard ceiling for `max_string_length`; a string can never exceed one large packet
pub const MAX_STRING_LENGTH_LIMIT: usize = 16 * 1024 * 1024;

/// Top-level configuration containing all configurable settings
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReaderConfig {
    /// Decoder limits and text encoding
    #[serde(default)]
    pub decoder: DecoderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ReaderConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| DecodeError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| DecodeError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| DecodeError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(length) = std::env::var("GAME_PACKET_READER_MAX_STRING_LENGTH") {
            let limit = length.parse::<usize>().map_err(|e| {
                DecodeError::ConfigError(format!("Invalid max string length '{length}': {e}"))
            })?;
            config.decoder.max_string_length = Some(limit);
        }

        if let Ok(charset) = std::env::var("GAME_PACKET_READER_CHARSET") {
            config.decoder.charset = charset
                .parse::<StringCharset>()
                .map_err(DecodeError::ConfigError)?;
        }

        if let Ok(level) = std::env::var("GAME_PACKET_READER_LOG_LEVEL") {
            config.logging.log_level = level
                .parse::<Level>()
                .map_err(|_| DecodeError::ConfigError(format!("Invalid log level: {level}")))?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DecodeError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| DecodeError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.decoder.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Settings consumed by [`GamePacketReader`](crate::core::reader::GamePacketReader)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DecoderConfig {
    /// Longest string accepted by `get_string`, excluding the terminator.
    /// `None` reads up to the terminator however far away it is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_string_length: Option<usize>,

    /// Encoding of string fields
    #[serde(default)]
    pub charset: StringCharset,
}

impl DecoderConfig {
    /// Validate decoder configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        match self.max_string_length {
            Some(0) => errors.push("Max string length must be greater than 0".to_string()),
            Some(limit) if limit > MAX_STRING_LENGTH_LIMIT => errors.push(format!(
                "Max string length too large: {limit} bytes (maximum: {MAX_STRING_LENGTH_LIMIT} bytes)"
            )),
            _ => {}
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level used when `RUST_LOG` is not set
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,

    /// Whether to include the module target in each line
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_with_target() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("game-packet-reader"),
            log_level: Level::INFO,
            json_format: false,
            with_target: default_with_target(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ReaderConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.decoder.max_string_length, None);
        assert_eq!(config.decoder.charset, StringCharset::Cp1252);
    }

    #[test]
    fn test_example_config_parses_back() {
        let text = ReaderConfig::example_config();
        let parsed = ReaderConfig::from_toml(&text).expect("example config should parse");
        assert_eq!(parsed.decoder.max_string_length, None);
        assert_eq!(parsed.logging.log_level, Level::INFO);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ReaderConfig::from_toml(
            r#"
            [decoder]
            max_string_length = 80
            "#,
        )
        .unwrap();
        assert_eq!(config.decoder.max_string_length, Some(80));
        assert_eq!(config.decoder.charset, StringCharset::Cp1252);
        assert_eq!(config.logging.app_name, "game-packet-reader");
    }

    #[test]
    fn test_zero_string_length_rejected() {
        let config =
            ReaderConfig::default_with_overrides(|c| c.decoder.max_string_length = Some(0));
        assert!(matches!(
            config.validate_strict(),
            Err(DecodeError::ConfigError(_))
        ));
    }
}
