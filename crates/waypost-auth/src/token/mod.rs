//! Session token issuance, verification, and cookie extraction.

pub mod claims;
pub mod codec;
pub mod cookie;

pub use claims::SessionClaims;
pub use codec::{SessionTokenCodec, TokenFailure};
pub use cookie::token_from_cookie_header;
