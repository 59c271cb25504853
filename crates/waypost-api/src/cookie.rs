//! Session cookie construction.
//!
//! Production cookies are `Secure; SameSite=None` so the static
//! frontend and the API can live on different origins; development
//! drops `Secure` and uses `SameSite=Lax` so plain-HTTP localhost
//! works. The clear cookie mirrors the same attributes with
//! `Max-Age=0`.

use waypost_core::config::app::Environment;

/// Builds the `Set-Cookie` value for a freshly issued session.
pub fn build_session_cookie(
    name: &str,
    token: &str,
    max_age_seconds: i64,
    environment: &Environment,
) -> String {
    cookie_with_attributes(name, token, max_age_seconds, environment)
}

/// Builds the `Set-Cookie` value that expires the session immediately.
pub fn build_clear_cookie(name: &str, environment: &Environment) -> String {
    cookie_with_attributes(name, "", 0, environment)
}

fn cookie_with_attributes(
    name: &str,
    value: &str,
    max_age_seconds: i64,
    environment: &Environment,
) -> String {
    let mut parts = vec![format!("{name}={value}"), "HttpOnly".to_string()];

    if environment.is_production() {
        parts.push("Secure".to_string());
        parts.push("SameSite=None".to_string());
    } else {
        parts.push("SameSite=Lax".to_string());
    }

    parts.push(format!("Max-Age={max_age_seconds}"));
    parts.push("Path=/".to_string());

    parts.join("; ")
}
