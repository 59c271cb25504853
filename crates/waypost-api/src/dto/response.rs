//! Response DTOs.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use waypost_entity::user::{User, UserRole};

/// Public view of an authenticated user.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    /// Username.
    pub username: String,
    /// Role.
    pub role: UserRole,
    /// Display name, when the account has one.
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            role: user.role,
            display_name: user.display_name.clone(),
        }
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize)]
pub struct LoginSuccessResponse {
    /// Always `true`.
    pub success: bool,
    /// The authenticated user.
    pub user: SessionUser,
    /// Session expiry as an ISO-8601 timestamp.
    #[serde(rename = "expiresAt")]
    pub expires_at: String,
    /// The session token, for cross-domain callers that cannot rely on
    /// the cookie.
    pub token: String,
}

/// Successful session verification response.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    /// Always `true`.
    pub authenticated: bool,
    /// The verified user.
    pub user: SessionUser,
    /// Session expiry as an ISO-8601 timestamp.
    #[serde(rename = "expiresAt")]
    pub expires_at: String,
}

/// Logout response; identical whether or not a session was present.
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    /// Always `true`.
    pub success: bool,
    /// Fixed confirmation message.
    pub message: String,
}

impl LogoutResponse {
    /// The one and only logout response.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: "Logged out successfully".to_string(),
        }
    }
}

/// Formats an expiry instant the way the wire contract expects.
pub fn format_expires_at(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_at_format() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(format_expires_at(at), "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn test_session_user_serialization() {
        let user = SessionUser {
            username: "alice".to_string(),
            role: UserRole::Contributor,
            display_name: Some("Alice".to_string()),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["role"], "contributor");
        assert_eq!(json["displayName"], "Alice");
    }
}
