//! HS256 session token creation and validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use waypost_core::error::AppError;
use waypost_entity::user::UserRole;

use super::claims::SessionClaims;

/// Standard session lifetime: 24 hours.
const TWENTY_FOUR_HOURS: i64 = 24 * 60 * 60;

/// Extended "remember me" session lifetime: 7 days.
const SEVEN_DAYS: i64 = 7 * 24 * 60 * 60;

/// Why a token failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFailure {
    /// Well-signed token past its expiration.
    Expired,
    /// Malformed token, wrong signature, or any other defect.
    Invalid,
}

/// Signs and verifies session tokens with a shared HS256 secret.
#[derive(Clone)]
pub struct SessionTokenCodec {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for SessionTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl SessionTokenCodec {
    /// Creates a codec from the shared signing secret.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Session lifetime in seconds for the given remember-me choice.
    pub fn session_ttl_seconds(remember_me: bool) -> i64 {
        if remember_me { SEVEN_DAYS } else { TWENTY_FOUR_HOURS }
    }

    /// Issues a signed session token for the given user.
    ///
    /// Returns the token string and its expiration instant.
    pub fn issue(
        &self,
        username: &str,
        role: &UserRole,
        remember_me: bool,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now().timestamp();
        let exp = now + Self::session_ttl_seconds(remember_me);

        let claims = SessionClaims {
            sub: username.to_string(),
            role: *role,
            iat: now,
            exp,
            remember_me,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AppError::internal("Session expiry out of range"))?;

        Ok((token, expires_at))
    }

    /// Decodes and validates a session token.
    ///
    /// Distinguishes only expired from every other defect; callers map
    /// the two onto their error contract.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenFailure> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenFailure::Expired,
                _ => TokenFailure::Invalid,
            })
    }
}
