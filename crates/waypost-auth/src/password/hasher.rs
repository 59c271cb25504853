//! bcrypt password hashing and verification.

use tracing::warn;

use waypost_core::error::AppError;

/// bcrypt work factor used for all new hashes.
const BCRYPT_COST: u32 = 10;

/// A well-formed bcrypt digest of a throwaway string, verified against
/// when no account matches the submitted username. Keeps the
/// user-not-found path at the same wall-clock cost as a real
/// verification, so response timing does not reveal which usernames
/// exist.
pub const DUMMY_HASH: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

/// Handles password hashing and verification using bcrypt.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with bcrypt at the standard work factor.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, BCRYPT_COST)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Verifies a plaintext password against a stored bcrypt hash.
    ///
    /// Returns `false` for a malformed stored hash instead of erroring,
    /// so a corrupt record is indistinguishable from a wrong password.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(matched) => matched,
            Err(e) => {
                warn!(error = %e, "Password verification against malformed hash");
                false
            }
        }
    }

    /// Burns one bcrypt verification against a fixed digest.
    ///
    /// Always returns `false`; used on the user-not-found path to keep
    /// timing comparable to a real verification.
    pub fn dummy_verify(&self, password: &str) -> bool {
        let _ = self.verify_password(password, DUMMY_HASH);
        false
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
