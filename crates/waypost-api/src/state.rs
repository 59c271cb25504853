//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use waypost_auth::password::PasswordHasher;
use waypost_auth::rate_limit::LoginRateLimiter;
use waypost_auth::token::SessionTokenCodec;
use waypost_core::config::AppConfig;
use waypost_core::traits::kv::KvStore;
use waypost_entity::user::UserDirectory;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// User credential lookup
    pub users: Arc<dyn UserDirectory>,
    /// Session token codec; `None` when no signing secret is configured,
    /// in which case auth endpoints answer 500 CONFIGURATION_ERROR
    pub token_codec: Option<Arc<SessionTokenCodec>>,
    /// Password hasher (bcrypt)
    pub password_hasher: PasswordHasher,
    /// Failed-login rate limiter (no-op without a KV store)
    pub rate_limiter: LoginRateLimiter,
    /// KV store handle, kept for health reporting; `None` when disabled
    pub kv: Option<Arc<dyn KvStore>>,
}

impl AppState {
    /// Wires up state from configuration and the infrastructure handles.
    pub fn new(
        config: Arc<AppConfig>,
        users: Arc<dyn UserDirectory>,
        kv: Option<Arc<dyn KvStore>>,
    ) -> Self {
        let token_codec = if config.auth.jwt_secret.is_empty() {
            None
        } else {
            Some(Arc::new(SessionTokenCodec::new(&config.auth.jwt_secret)))
        };

        Self {
            config,
            users,
            token_codec,
            password_hasher: PasswordHasher::new(),
            rate_limiter: LoginRateLimiter::new(kv.clone()),
            kv,
        }
    }
}
