//! Shared test helpers for integration tests.
//!
//! Tests run against the real router and handlers with an in-memory
//! key-value store and an in-memory user directory, so no Postgres or
//! Redis is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use waypost_api::state::AppState;
use waypost_auth::password::PasswordHasher;
use waypost_core::config::app::Environment;
use waypost_core::config::{AppConfig, DatabaseConfig};
use waypost_core::result::AppResult;
use waypost_core::traits::kv::KvStore;
use waypost_entity::user::{User, UserDirectory, UserRole};
use waypost_kv::memory::MemoryKvStore;

/// Signing secret shared by every test app.
pub const TEST_SECRET: &str = "test-signing-secret-for-waypost";

/// In-memory user directory seeded with fixed accounts.
#[derive(Debug, Default)]
pub struct FakeUserDirectory {
    users: Vec<User>,
}

impl FakeUserDirectory {
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for FakeUserDirectory {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Builds a seeded user record with a real bcrypt hash.
pub fn seed_user(username: &str, password: &str, role: UserRole, display_name: &str) -> User {
    let hasher = PasswordHasher::new();
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password_hash: hasher.hash_password(password).expect("hash password"),
        display_name: Some(display_name.to_string()),
        role,
        created_at: Utc::now(),
    }
}

/// Default fixture accounts present in every test app.
fn default_users() -> Vec<User> {
    vec![
        seed_user(
            "testuser",
            "testpassword123",
            UserRole::Contributor,
            "Test User",
        ),
        seed_user("reader_ann", "readerpass99", UserRole::Reader, "Ann"),
    ]
}

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Application state, for building custom protected routers and
    /// issuing tokens directly.
    pub state: AppState,
}

impl TestApp {
    /// Development-mode app with a signing secret and a memory KV store.
    pub fn new() -> Self {
        Self::build(Environment::Development, Some(TEST_SECRET), true)
    }

    /// Production-mode app (affects cookie attributes).
    pub fn production() -> Self {
        Self::build(Environment::Production, Some(TEST_SECRET), true)
    }

    /// App with no signing secret configured.
    pub fn without_secret() -> Self {
        Self::build(Environment::Development, None, true)
    }

    /// App with no key-value store (rate limiting disabled).
    pub fn without_kv() -> Self {
        Self::build(Environment::Development, Some(TEST_SECRET), false)
    }

    fn build(environment: Environment, secret: Option<&str>, with_kv: bool) -> Self {
        let mut config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                url: "postgres://unused".to_string(),
                max_connections: 1,
                min_connections: 1,
                connect_timeout_seconds: 1,
                idle_timeout_seconds: 1,
            },
            kv: Default::default(),
            auth: Default::default(),
            logging: Default::default(),
        };
        config.server.environment = environment;
        if let Some(secret) = secret {
            config.auth.jwt_secret = secret.to_string();
        }

        let users: Arc<dyn UserDirectory> =
            Arc::new(FakeUserDirectory::with_users(default_users()));
        let kv: Option<Arc<dyn KvStore>> = if with_kv {
            Some(Arc::new(MemoryKvStore::new()))
        } else {
            None
        };

        let state = AppState::new(Arc::new(config), users, kv);
        let router = waypost_api::build_router(state.clone());

        Self { router, state }
    }

    /// Issues a session token straight from the codec.
    pub fn issue_token(&self, username: &str, role: UserRole, remember_me: bool) -> String {
        let codec = self.state.token_codec.as_ref().expect("codec configured");
        let (token, _) = codec.issue(username, &role, remember_me).expect("issue");
        token
    }

    /// POST a JSON body.
    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("build request"),
        )
        .await
    }

    /// POST a raw (possibly malformed) body.
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("build request"),
        )
        .await
    }

    /// GET with optional Cookie and Authorization headers.
    pub async fn get_with_headers(
        &self,
        path: &str,
        cookie: Option<&str>,
        bearer: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            req = req.header("Cookie", cookie);
        }
        if let Some(token) = bearer {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        self.send(req.body(Body::empty()).expect("build request")).await
    }

    /// Runs a request against the app router.
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        Self::send_to(self.router.clone(), req).await
    }

    /// Runs a request against an arbitrary router (custom protected routes).
    pub async fn send_to(router: Router, req: Request<Body>) -> TestResponse {
        let response = router.oneshot(req).await.expect("send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers (for Set-Cookie assertions).
    pub headers: HeaderMap,
    /// Parsed JSON body.
    pub body: Value,
}

impl TestResponse {
    /// The Set-Cookie header value, if any.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers.get("set-cookie").and_then(|v| v.to_str().ok())
    }
}
