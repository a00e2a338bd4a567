//! Key-value store for device preferences
//!
//! A thin layer over sled holding UTF-8 string values. Keys written through
//! [`DeviceStore`] live under the `device:` scope, so the theme preference
//! is stored at `device:theme` with the bare mode string as its value.

use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Stored bytes are not valid UTF-8
    #[error("Invalid UTF-8 value for key {0}")]
    Encoding(String),

    /// Empty key or scope segment
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Store location and tuning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvConfig {
    /// Database directory
    pub path: String,
    /// Page cache size in bytes
    pub cache_capacity: u64,
    /// Compress values on disk
    pub use_compression: bool,
    /// Background flush period; `None` flushes only on request
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "goodseva_kv.db".to_string(),
            cache_capacity: 8 * 1024 * 1024,
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Defaults with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }
}

/// String key-value store on sled
pub struct KvStore {
    db: sled::Db,
}

impl KvStore {
    /// Open (or create) the store described by `config`
    pub fn new(config: KvConfig) -> Result<Self> {
        let db = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression)
            .flush_every_ms(config.flush_every_ms)
            .open()?;
        tracing::debug!(path = %config.path, "opened key-value store");

        Ok(Self { db })
    }

    /// Temporary store removed on drop
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Read a value
    pub fn get_str(&self, key: &str) -> Result<Option<String>> {
        let Some(bytes) = self.db.get(key)? else {
            return Ok(None);
        };
        String::from_utf8(bytes.to_vec())
            .map(Some)
            .map_err(|_| KvError::Encoding(key.to_string()))
    }

    /// Write a value, replacing any previous one
    pub fn set_str(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KvError::InvalidKey(key.to_string()));
        }
        self.db.insert(key, value.as_bytes())?;
        Ok(())
    }

    /// Delete a value, returning whether it existed
    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key)?.is_some())
    }

    /// Keys starting with `prefix`, in byte order
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        self.db
            .scan_prefix(prefix)
            .keys()
            .map(|key| {
                let key = key?;
                String::from_utf8(key.to_vec())
                    .map_err(|_| KvError::InvalidKey(String::from_utf8_lossy(&key).into_owned()))
            })
            .collect()
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

/// View of the store restricted to the `device:` scope
#[derive(Clone)]
pub struct DeviceStore {
    kv: Arc<KvStore>,
}

impl DeviceStore {
    /// Scope prefix shared by every device-level key
    pub const SCOPE: &'static str = "device";

    /// Wrap a shared store
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    fn scoped(name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(KvError::InvalidKey(name.to_string()));
        }
        Ok(format!("{}:{}", Self::SCOPE, name))
    }

    /// Read a device value
    pub fn get_str(&self, name: &str) -> Result<Option<String>> {
        self.kv.get_str(&Self::scoped(name)?)
    }

    /// Write a device value
    pub fn set_str(&self, name: &str, value: &str) -> Result<()> {
        self.kv.set_str(&Self::scoped(name)?, value)
    }

    /// Delete a device value
    pub fn remove(&self, name: &str) -> Result<bool> {
        self.kv.remove(&Self::scoped(name)?)
    }

    /// Names of every stored device value
    pub fn names(&self) -> Result<Vec<String>> {
        let prefix = format!("{}:", Self::SCOPE);
        Ok(self
            .kv
            .keys_with_prefix(&prefix)?
            .into_iter()
            .filter_map(|key| key.strip_prefix(&prefix).map(str::to_string))
            .collect())
    }

    /// Flush the underlying store
    pub fn flush(&self) -> Result<()> {
        self.kv.flush()
    }
}
