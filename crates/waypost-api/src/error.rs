//! The API error contract: every failure is a JSON body with a
//! machine-readable code and a human-readable message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use waypost_core::error::AppError;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Always `false` on errors.
    pub success: bool,
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Seconds until retry, on rate-limited responses.
    #[serde(rename = "retryAfter", skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

/// An HTTP-level API failure with a fixed status and error code.
///
/// Credential failures deliberately share one code and message for
/// both the unknown-username and wrong-password paths, so the response
/// body never reveals which usernames exist.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status to answer with.
    pub status: StatusCode,
    /// Machine-readable error code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Seconds until retry, for 429 responses.
    pub retry_after: Option<u64>,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            retry_after: None,
        }
    }

    /// 400 — malformed or rejected request input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_INPUT", message)
    }

    /// 401 — unknown username or wrong password, indistinguishably.
    pub fn invalid_credentials() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "Invalid username or password",
        )
    }

    /// 429 — too many failed login attempts.
    pub fn rate_limited(retry_after: u64) -> Self {
        Self {
            status: StatusCode::TOO_MANY_REQUESTS,
            code: "RATE_LIMITED",
            message: "Too many failed login attempts. Please try again in 15 minutes.".to_string(),
            retry_after: Some(retry_after),
        }
    }

    /// 401 — no session cookie on a verify request.
    pub fn no_session() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "NO_SESSION", "No session found")
    }

    /// 401 — verify found a well-signed but expired token.
    pub fn session_expired() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "SESSION_EXPIRED",
            "Session has expired",
        )
    }

    /// 401 — verify found a malformed or forged token.
    pub fn invalid_session() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "INVALID_SESSION",
            "Invalid or expired session",
        )
    }

    /// 401 — protected route called without any token.
    pub fn authentication_required() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "AUTHENTICATION_REQUIRED",
            "Authentication required",
        )
    }

    /// 401 — protected route called with an expired token.
    pub fn token_expired() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "EXPIRED", "Token expired")
    }

    /// 401 — protected route called with a malformed or forged token.
    pub fn token_invalid() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "INVALID", "Invalid token")
    }

    /// 403 — authenticated but lacking the contributor role.
    pub fn forbidden() -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "Contributor role required",
        )
    }

    /// 500 — the signing secret is absent from configuration.
    pub fn configuration() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "CONFIGURATION_ERROR",
            "JWT secret not configured",
        )
    }

    /// 500 — anything unexpected; details stay in the logs.
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        tracing::error!(error = %err, "Internal error reached the API boundary");
        Self::internal()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            success: false,
            error: self.code.to_string(),
            message: self.message,
            retry_after: self.retry_after,
        };
        (self.status, Json(body)).into_response()
    }
}
