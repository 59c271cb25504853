//! Key-value manager that dispatches to the configured provider.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use waypost_core::config::kv::KvConfig;
use waypost_core::error::AppError;
use waypost_core::result::AppResult;
use waypost_core::traits::kv::KvStore;

/// Key-value manager that wraps the configured store provider.
///
/// The provider is selected at construction time based on configuration.
/// `new` returns `None` for the `disabled` provider, in which case
/// consumers (the rate limiter) run in fail-open mode.
#[derive(Debug, Clone)]
pub struct KvManager {
    /// The inner store provider.
    inner: Arc<dyn KvStore>,
}

impl KvManager {
    /// Create a new key-value manager from configuration.
    pub async fn new(config: &KvConfig) -> AppResult<Option<Self>> {
        let inner: Arc<dyn KvStore> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis key-value provider");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisKvStore::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory key-value provider");
                Arc::new(crate::memory::MemoryKvStore::new())
            }
            "disabled" => {
                info!("Key-value store disabled by configuration");
                return Ok(None);
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown kv provider: '{other}'. Supported: memory, redis, disabled"
                )));
            }
        };

        Ok(Some(Self { inner }))
    }

    /// Create a manager from an existing provider (for testing).
    pub fn from_store(store: Arc<dyn KvStore>) -> Self {
        Self { inner: store }
    }
}

#[async_trait]
impl KvStore for KvManager {
    async fn list_keys(&self, prefix: &str) -> AppResult<Vec<String>> {
        self.inner.list_keys(prefix).await
    }

    async fn put(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.inner.put(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.inner.delete(key).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
