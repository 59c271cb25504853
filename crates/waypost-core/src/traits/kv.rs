//! TTL key-value store trait for pluggable backends.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for TTL-backed key-value stores (Redis or in-memory).
///
/// This is the narrow interface the auth core consumes: entries are
/// written with a TTL and removed only by expiry (or an explicit delete).
/// Values are opaque strings; callers serialize as JSON where needed.
#[async_trait]
pub trait KvStore: Send + Sync + std::fmt::Debug + 'static {
    /// List all live (non-expired) keys starting with `prefix`.
    async fn list_keys(&self, prefix: &str) -> AppResult<Vec<String>>;

    /// Write a value under `key` that expires after `ttl`.
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check that the store backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
