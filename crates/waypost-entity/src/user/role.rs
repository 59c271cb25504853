//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available on the platform.
///
/// Readers can view published posts; contributors can also author and
/// manage posts and media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Read-only access to published content.
    Reader,
    /// Can create and edit posts and upload media.
    Contributor,
}

impl UserRole {
    /// Check if this role grants authoring access.
    pub fn is_contributor(&self) -> bool {
        matches!(self, Self::Contributor)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reader => "reader",
            Self::Contributor => "contributor",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = waypost_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reader" => Ok(Self::Reader),
            "contributor" => Ok(Self::Contributor),
            _ => Err(waypost_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: reader, contributor"
            ))),
        }
    }
}
