// RUNTIME PREFERENCES (User Experience)
//
// Loaded from an optional TOML file. Every field has a default so a partial
// file (or no file at all) is valid.

use super::compile_time::symbols::{DEFAULT_BUCKET_COUNT, MAX_BUCKET_COUNT};
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Errors raised while reading runtime preferences
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {message}")]
    Unreadable { path: String, message: String },

    #[error("Invalid configuration TOML: {message}")]
    InvalidToml { message: String },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablePreferences {
    /// Number of buckets for tables built from this configuration
    pub bucket_count: usize,

    /// Whether successful inserts emit a success event
    pub log_successful_inserts: bool,
}

impl Default for TablePreferences {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            log_successful_inserts: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderPreferences {
    /// Lines starting with this marker (after trimming) are skipped
    pub comment_prefix: String,

    /// Whether the loader prints one line per rejected declaration
    pub report_rejections: bool,
}

impl Default for LoaderPreferences {
    fn default() -> Self {
        Self {
            comment_prefix: "//".to_string(),
            report_rejections: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output at all
    pub enable_console_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,

    /// Whether loader diagnostics carry the file path and line
    pub include_file_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: false,
            enable_console_logging: false,
            min_log_level: LogLevel::Info,
            include_file_context: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub table: TablePreferences,
    pub loader: LoaderPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse preferences from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(content).map_err(|e| ConfigError::InvalidToml {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a preferences file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Check preferences against the compile-time limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.bucket_count == 0 || self.table.bucket_count > MAX_BUCKET_COUNT {
            return Err(ConfigError::InvalidValue {
                field: "table.bucket_count",
                reason: format!("must be in 1..={}", MAX_BUCKET_COUNT),
            });
        }

        if self.loader.comment_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "loader.comment_prefix",
                reason: "must not be blank".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.table.bucket_count, DEFAULT_BUCKET_COUNT);
        assert_eq!(config.loader.comment_prefix, "//");
        assert_eq!(config.logging.min_log_level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [table]
            bucket_count = 7

            [logging]
            min_log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.table.bucket_count, 7);
        assert!(config.table.log_successful_inserts);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert_eq!(config.loader, LoaderPreferences::default());
    }

    #[test]
    fn test_zero_buckets_rejected() {
        let result = RuntimeConfig::from_toml_str("[table]\nbucket_count = 0\n");
        assert_matches!(
            result,
            Err(ConfigError::InvalidValue { field: "table.bucket_count", .. })
        );
    }

    #[test]
    fn test_invalid_toml() {
        let result = RuntimeConfig::from_toml_str("[table\nbucket_count = ");
        assert_matches!(result, Err(ConfigError::InvalidToml { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[loader]\ncomment_prefix = \"#\"").unwrap();

        let config = RuntimeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.loader.comment_prefix, "#");
    }

    #[test]
    fn test_missing_file() {
        let result = RuntimeConfig::from_file("/definitely/not/here.toml");
        assert_matches!(result, Err(ConfigError::Unreadable { .. }));
    }
}
