//! Application configuration
//!
//! Loaded from a TOML file. Every field has a default, so an empty file (or
//! no file at all) is a valid configuration:
//!
//! ```toml
//! [storage]
//! path = "goodseva_kv.db"
//! cache_capacity_mb = 8
//! compression = true
//!
//! [data]
//! fetch_delay_ms = 500
//!
//! [logging]
//! level = "info"
//! format = "compact"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use storage::KvConfig;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`AppConfig`]
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Invalid value for {field}: {message}")]
    Invalid {
        /// Dotted field name
        field: &'static str,
        /// What is wrong
        message: String,
    },
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key-value store settings
    pub storage: StorageConfig,
    /// Mock data provider settings
    pub data: DataConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Key-value store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database directory
    pub path: String,
    /// Page cache size in megabytes
    pub cache_capacity_mb: u64,
    /// Compress values on disk
    pub compression: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "goodseva_kv.db".to_string(),
            cache_capacity_mb: 8,
            compression: true,
        }
    }
}

impl StorageConfig {
    /// Build the store configuration
    pub fn kv_config(&self) -> KvConfig {
        KvConfig::new(self.path.clone())
            .cache_capacity(self.cache_capacity_mb * 1024 * 1024)
            .use_compression(self.compression)
    }
}

/// Mock data provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Simulated latency of every fetch and form submit
    pub fetch_delay_ms: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { fetch_delay_ms: 500 }
    }
}

impl DataConfig {
    /// Simulated latency
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single line
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Line format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but cannot work
    pub fn validate(&self) -> Result<()> {
        if self.storage.path.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "storage.path",
                message: "must not be empty".to_string(),
            });
        }
        if self.storage.cache_capacity_mb == 0 {
            return Err(ConfigError::Invalid {
                field: "storage.cache_capacity_mb",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
