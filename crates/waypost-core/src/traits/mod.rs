//! Trait seams between the auth core and its external collaborators.

pub mod kv;

pub use kv::KvStore;
