//! # waypost-api
//!
//! HTTP API layer for Waypost: the session-authentication endpoints,
//! the request extractors protected routes use, and the error contract
//! every response follows.

pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
