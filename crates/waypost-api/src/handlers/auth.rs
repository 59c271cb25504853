//! Auth handlers — login, logout, verify.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use waypost_auth::password::{
    is_valid_password, is_valid_username, sanitize_password, sanitize_username,
};
use waypost_auth::token::{SessionTokenCodec, TokenFailure, token_from_cookie_header};

use crate::cookie::{build_clear_cookie, build_session_cookie};
use crate::dto::request::LoginRequest;
use crate::dto::response::{
    LoginSuccessResponse, LogoutResponse, SessionUser, VerifyResponse, format_expires_at,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Client IP as reported by the fronting proxy, for forensic records.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// POST /api/auth/login
///
/// Sanitize → validate → rate-limit check → lookup → verify → issue.
/// The unknown-username and wrong-password paths both burn a bcrypt
/// verification and both answer with the same INVALID_CREDENTIALS
/// body, so neither timing nor content reveals which usernames exist.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload.map_err(|e| {
        warn!(error = %e, "Login request body rejected");
        ApiError::invalid_input("Invalid request body")
    })?;

    let (Some(raw_username), Some(raw_password)) = (req.username, req.password) else {
        return Err(ApiError::invalid_input("Username and password are required"));
    };
    if raw_username.is_empty() || raw_password.is_empty() {
        return Err(ApiError::invalid_input("Username and password are required"));
    }

    let username = sanitize_username(&raw_username);
    let password = sanitize_password(&raw_password);

    if !is_valid_username(&username) {
        return Err(ApiError::invalid_input(
            "Username must be 3-50 characters and contain only letters, numbers, and underscores",
        ));
    }
    if !is_valid_password(&password) {
        return Err(ApiError::invalid_input("Password must be 8-72 characters"));
    }

    let decision = state.rate_limiter.check(&username).await;
    if !decision.allowed {
        warn!(username, "Login rejected by rate limiter");
        return Err(ApiError::rate_limited(decision.retry_after.unwrap_or(900)));
    }

    let ip = client_ip(&headers);

    let Some(user) = state.users.find_by_username(&username).await? else {
        warn!(username, "Login attempt for unknown username");
        // Burn an equivalent-cost verification so this path is not
        // measurably faster than a wrong password.
        state.password_hasher.dummy_verify(&password);
        state
            .rate_limiter
            .record_failure(&username, ip.as_deref())
            .await;
        return Err(ApiError::invalid_credentials());
    };

    if !state
        .password_hasher
        .verify_password(&password, &user.password_hash)
    {
        warn!(username, "Login attempt with wrong password");
        state
            .rate_limiter
            .record_failure(&username, ip.as_deref())
            .await;
        return Err(ApiError::invalid_credentials());
    }

    let codec = state.token_codec.as_ref().ok_or_else(ApiError::configuration)?;
    let (token, expires_at) = codec.issue(&user.username, &user.role, req.remember_me)?;

    info!(
        username = %user.username,
        role = %user.role,
        remember_me = req.remember_me,
        "Login successful"
    );

    let max_age = SessionTokenCodec::session_ttl_seconds(req.remember_me);
    let cookie = build_session_cookie(
        &state.config.auth.cookie_name,
        &token,
        max_age,
        &state.config.server.environment,
    );

    let body = LoginSuccessResponse {
        success: true,
        user: SessionUser::from(&user),
        expires_at: format_expires_at(expires_at),
        token,
    };

    Ok(([(SET_COOKIE, cookie)], Json(body)).into_response())
}

/// POST /api/auth/logout
///
/// Always answers 200 with a clear cookie; there is nothing server-side
/// to tear down, and a logout that "fails" must never trap the client
/// in a signed-in state. Idempotent.
pub async fn logout(State(state): State<AppState>) -> Response {
    let cookie = build_clear_cookie(
        &state.config.auth.cookie_name,
        &state.config.server.environment,
    );
    ([(SET_COOKIE, cookie)], Json(LogoutResponse::ok())).into_response()
}

/// GET /api/auth/verify
///
/// Cookie-driven session check: verifies the token and re-confirms the
/// subject still exists, so a deleted account's outstanding tokens stop
/// working immediately.
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<VerifyResponse>, ApiError> {
    let cookie_header = headers.get("cookie").and_then(|v| v.to_str().ok());
    let token = token_from_cookie_header(cookie_header, &state.config.auth.cookie_name)
        .ok_or_else(ApiError::no_session)?;

    let codec = state.token_codec.as_ref().ok_or_else(ApiError::configuration)?;
    let claims = codec.verify(token).map_err(|failure| match failure {
        TokenFailure::Expired => ApiError::session_expired(),
        TokenFailure::Invalid => ApiError::invalid_session(),
    })?;

    let Some(user) = state.users.find_by_username(claims.username()).await? else {
        warn!(username = claims.username(), "Session subject no longer exists");
        return Err(ApiError::invalid_session());
    };

    Ok(Json(VerifyResponse {
        authenticated: true,
        user: SessionUser::from(&user),
        expires_at: format_expires_at(claims.expires_at()),
    }))
}
