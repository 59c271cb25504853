//! Password hashing and credential input sanitization.

pub mod hasher;
pub mod validator;

pub use hasher::PasswordHasher;
pub use validator::{is_valid_password, is_valid_username, sanitize_password, sanitize_username};
