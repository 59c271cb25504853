//! Request DTOs.

use serde::Deserialize;

/// Login request body.
///
/// `username` and `password` are optional at the schema level so a
/// shape mismatch surfaces as the missing-fields message rather than a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Submitted username.
    pub username: Option<String>,
    /// Submitted plaintext password.
    pub password: Option<String>,
    /// Extend the session from 24 hours to 7 days.
    #[serde(default)]
    pub remember_me: bool,
}
