//! Session extractors — pull the token from the request, validate it,
//! and inject the verified claims into handlers.
//!
//! The `Authorization: Bearer` header wins over the session cookie, so
//! cross-domain callers that cannot send cookies still authenticate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use waypost_auth::token::{TokenFailure, token_from_cookie_header};
use waypost_auth::SessionClaims;

use crate::error::ApiError;
use crate::state::AppState;

/// Finds the session token in the Authorization header or cookie.
fn extract_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let bearer = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    let cookie_header = parts.headers.get("cookie").and_then(|v| v.to_str().ok());
    token_from_cookie_header(cookie_header, cookie_name).map(str::to_string)
}

/// Verifies a token against the state's codec, mapping failures onto
/// the protected-route error contract.
fn verify_token(state: &AppState, token: &str) -> Result<SessionClaims, ApiError> {
    let codec = state.token_codec.as_ref().ok_or_else(ApiError::configuration)?;
    codec.verify(token).map_err(|failure| match failure {
        TokenFailure::Expired => ApiError::token_expired(),
        TokenFailure::Invalid => ApiError::token_invalid(),
    })
}

/// A verified session, required. Rejects with 401 when the token is
/// missing, expired, or invalid.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionClaims);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts, &state.config.auth.cookie_name)
            .ok_or_else(ApiError::authentication_required)?;
        let claims = verify_token(state, &token)?;
        Ok(CurrentSession(claims))
    }
}

/// A verified session whose subject holds the contributor role.
/// Rejects with 403 for any other role.
#[derive(Debug, Clone)]
pub struct Contributor(pub SessionClaims);

impl FromRequestParts<AppState> for Contributor {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentSession(claims) = CurrentSession::from_request_parts(parts, state).await?;
        if !claims.role.is_contributor() {
            return Err(ApiError::forbidden());
        }
        Ok(Contributor(claims))
    }
}

/// An optional session: absent tokens pass through as `None`, but a
/// token that is present and fails verification still rejects.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<SessionClaims>);

impl FromRequestParts<AppState> for OptionalSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = extract_token(parts, &state.config.auth.cookie_name) else {
            return Ok(OptionalSession(None));
        };
        let claims = verify_token(state, &token)?;
        Ok(OptionalSession(Some(claims)))
    }
}
