//! Per-username failed-login limiter.
//!
//! Each failed attempt is written as its own KV entry with a 15-minute
//! TTL; the attempt count is the number of live entries under the
//! username's prefix. Store expiry does the sliding-window bookkeeping,
//! so there is no counter to reset.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use waypost_core::traits::kv::KvStore;

/// Failed attempts allowed inside the window before lockout.
const MAX_ATTEMPTS: u32 = 5;

/// Lockout window: 15 minutes.
const LOCKOUT_DURATION: Duration = Duration::from_secs(15 * 60);

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the login attempt may proceed.
    pub allowed: bool,
    /// Attempts left before lockout.
    pub attempts_remaining: u32,
    /// Seconds until the caller should retry, when locked out.
    pub retry_after: Option<u64>,
}

impl RateLimitDecision {
    /// Decision used whenever the store is absent or failing.
    fn fail_open() -> Self {
        Self {
            allowed: true,
            attempts_remaining: MAX_ATTEMPTS,
            retry_after: None,
        }
    }
}

/// Record stored per failed attempt, kept for forensics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FailedAttempt {
    /// Username the attempt targeted.
    username: String,
    /// Attempt time in epoch milliseconds.
    attempt_time: i64,
    /// Client IP, when the request carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    ip_address: Option<String>,
}

/// Tracks failed login attempts per username.
///
/// Constructed without a store it degrades to a no-op: every check is
/// allowed and failures are not recorded. Store errors degrade the same
/// way, so an outage never locks users out of login.
#[derive(Debug, Clone, Default)]
pub struct LoginRateLimiter {
    /// Backing TTL store, if configured.
    store: Option<Arc<dyn KvStore>>,
}

impl LoginRateLimiter {
    /// Creates a limiter over the given store, or a no-op limiter for `None`.
    pub fn new(store: Option<Arc<dyn KvStore>>) -> Self {
        Self { store }
    }

    /// Key prefix holding all live attempts for a username.
    fn attempt_prefix(username: &str) -> String {
        format!("ratelimit:{username}:")
    }

    /// Checks whether a login attempt for `username` may proceed.
    pub async fn check(&self, username: &str) -> RateLimitDecision {
        let Some(store) = &self.store else {
            warn!("Rate limiting disabled: no key-value store configured");
            return RateLimitDecision::fail_open();
        };

        let keys = match store.list_keys(&Self::attempt_prefix(username)).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!(error = %e, "Rate limit check failed, allowing request");
                return RateLimitDecision::fail_open();
            }
        };

        let attempts = keys.len() as u32;
        if attempts >= MAX_ATTEMPTS {
            return RateLimitDecision {
                allowed: false,
                attempts_remaining: 0,
                retry_after: Some(LOCKOUT_DURATION.as_secs()),
            };
        }

        RateLimitDecision {
            allowed: true,
            attempts_remaining: MAX_ATTEMPTS - attempts,
            retry_after: None,
        }
    }

    /// Records a failed login attempt. Best effort: store errors are
    /// logged and swallowed.
    pub async fn record_failure(&self, username: &str, ip_address: Option<&str>) {
        let Some(store) = &self.store else {
            return;
        };

        let attempt_time = Utc::now().timestamp_millis();
        let key = format!("{}{attempt_time}", Self::attempt_prefix(username));
        let record = FailedAttempt {
            username: username.to_string(),
            attempt_time,
            ip_address: ip_address.map(str::to_string),
        };

        let value = match serde_json::to_string(&record) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to serialize login failure record");
                return;
            }
        };

        if let Err(e) = store.put(&key, &value, LOCKOUT_DURATION).await {
            warn!(error = %e, "Failed to record login failure");
        }
    }

    /// Removes all live attempts for a username.
    pub async fn clear_failures(&self, username: &str) {
        let Some(store) = &self.store else {
            return;
        };

        let prefix = Self::attempt_prefix(username);
        let keys = match store.list_keys(&prefix).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!(error = %e, "Failed to list login failures for clearing");
                return;
            }
        };

        for key in keys {
            if let Err(e) = store.delete(&key).await {
                warn!(error = %e, key, "Failed to clear login failure record");
            }
        }
    }
}
