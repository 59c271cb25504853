//! Credential input sanitization and format validation.
//!
//! Sanitization runs before validation so that stray whitespace or
//! casing differences never cause a lookup miss, and so oversized
//! inputs are truncated before they reach bcrypt.

/// Maximum sanitized username length.
const USERNAME_MAX_RAW: usize = 100;

/// bcrypt operates on at most 72 bytes of input.
const PASSWORD_MAX: usize = 72;

/// Sanitize a submitted username: trim whitespace, lowercase, strip
/// null bytes, and cap the length.
pub fn sanitize_username(username: &str) -> String {
    username
        .trim()
        .to_lowercase()
        .replace('\0', "")
        .chars()
        .take(USERNAME_MAX_RAW)
        .collect()
}

/// Sanitize a submitted password: trim whitespace, strip null bytes,
/// and cap at the bcrypt input limit.
pub fn sanitize_password(password: &str) -> String {
    password
        .trim()
        .replace('\0', "")
        .chars()
        .take(PASSWORD_MAX)
        .collect()
}

/// Whether a sanitized username is 3-50 characters of lowercase
/// alphanumerics and underscores.
pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    if !(3..=50).contains(&len) {
        return false;
    }
    username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Whether a sanitized password is 8-72 characters.
pub fn is_valid_password(password: &str) -> bool {
    (8..=72).contains(&password.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_username_trims_and_lowercases() {
        assert_eq!(sanitize_username("  TestUser  "), "testuser");
        assert_eq!(sanitize_username("Admin\0"), "admin");
    }

    #[test]
    fn test_sanitize_username_caps_length() {
        let long = "a".repeat(200);
        assert_eq!(sanitize_username(&long).len(), USERNAME_MAX_RAW);
    }

    #[test]
    fn test_sanitize_password_preserves_case() {
        assert_eq!(sanitize_password("  MyPassw0rd!  "), "MyPassw0rd!");
    }

    #[test]
    fn test_sanitize_password_caps_at_bcrypt_limit() {
        let long = "x".repeat(100);
        assert_eq!(sanitize_password(&long).len(), PASSWORD_MAX);
    }

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("abc"));
        assert!(is_valid_username("test_user_42"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username(&"a".repeat(51)));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username("mixed-dash"));
        assert!(!is_valid_username(""));
    }

    #[test]
    fn test_valid_passwords() {
        assert!(is_valid_password("12345678"));
        assert!(is_valid_password(&"p".repeat(72)));
        assert!(!is_valid_password("short"));
        assert!(!is_valid_password(&"p".repeat(73)));
    }
}
