//! Key-value store provider configuration.

use serde::{Deserialize, Serialize};

/// Top-level key-value store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KvConfig {
    /// Provider type: `"memory"`, `"redis"`, or `"disabled"`.
    ///
    /// `disabled` leaves the service without a rate-limit store; the
    /// limiter then fails open.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Redis-specific configuration.
    #[serde(default)]
    pub redis: RedisKvConfig,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            redis: RedisKvConfig::default(),
        }
    }
}

/// Redis key-value backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisKvConfig {
    /// Redis connection URL.
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Key prefix for all Waypost keys.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for RedisKvConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            key_prefix: default_key_prefix(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_key_prefix() -> String {
    "waypost:".to_string()
}
