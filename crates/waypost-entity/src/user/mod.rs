//! User entity, role, and credential-store seam.

pub mod directory;
pub mod model;
pub mod role;

pub use directory::UserDirectory;
pub use model::User;
pub use role::UserRole;
