//! In-memory key-value store with per-entry TTL.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use waypost_core::result::AppResult;
use waypost_core::traits::kv::KvStore;

/// In-memory store used in development and tests.
///
/// Expiry is lazy: entries past their deadline are skipped on read and
/// pruned on write. Single-node only.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    /// Key → (value, expiry deadline).
    entries: DashMap<String, (String, Instant)>,
}

impl MemoryKvStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all entries whose deadline has passed.
    fn prune_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, (_, deadline)| *deadline > now);
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn list_keys(&self, prefix: &str) -> AppResult<Vec<String>> {
        let now = Instant::now();
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix) && entry.value().1 > now)
            .map(|entry| entry.key().clone())
            .collect())
    }

    async fn put(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.prune_expired();
        self.entries
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
