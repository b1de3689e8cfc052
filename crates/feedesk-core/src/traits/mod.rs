//! Core traits defined in `feedesk-core` and implemented by other crates.

pub mod storage;

pub use storage::TokenStorage;
