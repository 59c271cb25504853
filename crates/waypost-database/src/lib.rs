//! # waypost-database
//!
//! PostgreSQL connection management, migrations, and the concrete
//! user repository for Waypost.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
