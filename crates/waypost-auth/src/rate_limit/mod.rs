//! Failed-login rate limiting backed by a TTL key-value store.

pub mod limiter;

pub use limiter::{LoginRateLimiter, RateLimitDecision};
