//! # waypost-auth
//!
//! Credential verification and session management for the Waypost platform.
//!
//! ## Modules
//!
//! - `password` — bcrypt password hashing and input sanitization
//! - `token` — HS256 session token issuance, verification, and cookie parsing
//! - `rate_limit` — KV-backed failed-login rate limiting

pub mod password;
pub mod rate_limit;
pub mod token;

pub use password::PasswordHasher;
pub use rate_limit::{LoginRateLimiter, RateLimitDecision};
pub use token::{SessionClaims, SessionTokenCodec, TokenFailure};
