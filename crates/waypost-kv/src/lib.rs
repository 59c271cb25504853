//! # waypost-kv
//!
//! TTL key-value store providers for Waypost. The auth core's rate
//! limiter writes auto-expiring failure records through the
//! [`waypost_core::traits::KvStore`] trait; this crate supplies the
//! Redis and in-memory implementations and the configuration-driven
//! dispatch.

#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::KvManager;
