//! Integration tests for the session verification endpoint.

mod helpers;

use chrono::Utc;
use http::StatusCode;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

use waypost_auth::SessionClaims;
use waypost_entity::user::UserRole;

use helpers::{TEST_SECRET, TestApp};

/// Signs arbitrary claims with the given secret, bypassing the codec's
/// issuance rules.
fn sign_claims(claims: &SessionClaims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encode token")
}

#[tokio::test]
async fn test_verify_with_valid_cookie() {
    let app = TestApp::new();
    let token = app.issue_token("testuser", UserRole::Contributor, false);

    let response = app
        .get_with_headers("/api/auth/verify", Some(&format!("session={token}")), None)
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["authenticated"], true);
    assert_eq!(response.body["user"]["username"], "testuser");
    assert_eq!(response.body["user"]["role"], "contributor");
    assert_eq!(response.body["user"]["displayName"], "Test User");
    assert!(response.body["expiresAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_verify_finds_cookie_among_others() {
    let app = TestApp::new();
    let token = app.issue_token("reader_ann", UserRole::Reader, true);

    let response = app
        .get_with_headers(
            "/api/auth/verify",
            Some(&format!("theme=dark; session={token}; lang=en")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], "reader_ann");
}

#[tokio::test]
async fn test_verify_without_cookie_is_no_session() {
    let app = TestApp::new();

    // A cleared cookie ("session=") counts as no session, not an
    // invalid one.
    for cookie in [None, Some("theme=dark"), Some("session=")] {
        let response = app.get_with_headers("/api/auth/verify", cookie, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "NO_SESSION");
        assert_eq!(response.body["message"], "No session found");
    }
}

#[tokio::test]
async fn test_verify_garbage_token_is_invalid_session() {
    let app = TestApp::new();

    let response = app
        .get_with_headers("/api/auth/verify", Some("session=not.a.token"), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_SESSION");
    assert_eq!(response.body["message"], "Invalid or expired session");
}

#[tokio::test]
async fn test_verify_expired_token_is_session_expired() {
    let app = TestApp::new();
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: "testuser".to_string(),
        role: UserRole::Contributor,
        iat: now - 90_000,
        exp: now - 3_600,
        remember_me: false,
    };
    let token = sign_claims(&claims, TEST_SECRET);

    let response = app
        .get_with_headers("/api/auth/verify", Some(&format!("session={token}")), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "SESSION_EXPIRED");
    assert_eq!(response.body["message"], "Session has expired");
}

#[tokio::test]
async fn test_verify_wrong_signature_is_invalid_session() {
    let app = TestApp::new();
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: "testuser".to_string(),
        role: UserRole::Contributor,
        iat: now,
        exp: now + 3_600,
        remember_me: false,
    };
    let token = sign_claims(&claims, "some-other-secret");

    let response = app
        .get_with_headers("/api/auth/verify", Some(&format!("session={token}")), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_SESSION");
}

#[tokio::test]
async fn test_verify_deleted_subject_is_invalid_session() {
    let app = TestApp::new();
    // Well-signed token for an account the directory no longer has.
    let token = app.issue_token("ghost_user", UserRole::Reader, false);

    let response = app
        .get_with_headers("/api/auth/verify", Some(&format!("session={token}")), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_SESSION");
}

#[tokio::test]
async fn test_verify_without_secret_is_configuration_error() {
    let app = TestApp::without_secret();

    let response = app
        .get_with_headers("/api/auth/verify", Some("session=any.token.here"), None)
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "CONFIGURATION_ERROR");
}

#[tokio::test]
async fn test_login_then_verify_round_trip() {
    let app = TestApp::new();

    let login = app
        .post_json(
            "/api/auth/login",
            json!({"username": "testuser", "password": "testpassword123", "rememberMe": true}),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    let token = login.body["token"].as_str().unwrap().to_string();

    let verify = app
        .get_with_headers("/api/auth/verify", Some(&format!("session={token}")), None)
        .await;

    assert_eq!(verify.status, StatusCode::OK);
    assert_eq!(verify.body["authenticated"], true);
    assert_eq!(verify.body["expiresAt"], login.body["expiresAt"]);
}
