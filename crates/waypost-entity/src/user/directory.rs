//! Credential-store lookup seam.

use async_trait::async_trait;

use waypost_core::AppResult;

use super::model::User;

/// Read-only lookup into the user credential store.
///
/// The auth core never mutates user records; this trait is the entire
/// surface it needs. Production uses the PostgreSQL repository, tests
/// substitute an in-memory fake.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by username, case-insensitively.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Probe whether the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
