//! Durable key/value storage for the session token.

use crate::result::AppResult;

/// Client-local durable storage, shaped like a browser's `localStorage`.
///
/// Implementations are synchronous: the session store reads the persisted
/// token exactly once at start-up, before any reader observes a value,
/// and every write happens inside a single session transition.
pub trait TokenStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Get the value stored under `key`. Returns `None` if nothing is stored.
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> AppResult<()>;
}
