//! Request and response DTOs. Wire casing is camelCase throughout.

pub mod request;
pub mod response;
