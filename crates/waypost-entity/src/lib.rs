//! # waypost-entity
//!
//! Domain entities for Waypost. Currently the user record and its
//! lookup seam; post and media entities live with their own services.

pub mod user;

pub use user::{User, UserDirectory, UserRole};
