//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and session-token configuration.
///
/// Token lifetimes and rate-limit parameters are deliberately not
/// configurable: they are contract constants owned by `waypost-auth`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session-token signing (HMAC-SHA256).
    ///
    /// Empty means unconfigured; handlers respond with a configuration
    /// error rather than signing with a guessable default.
    #[serde(default)]
    pub jwt_secret: String,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_cookie_name() -> String {
    "session".to_string()
}
