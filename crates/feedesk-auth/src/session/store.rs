//! The single source of truth for the current bearer token.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use feedesk_core::config::SessionConfig;
use feedesk_core::result::AppResult;
use feedesk_core::traits::TokenStorage;

use crate::jwt::TokenCodec;

use super::observable::{Observable, Subscription};
use super::storage::FileTokenStorage;

/// Observable token slot persisted to durable storage.
///
/// Holds at most one token. `AuthGateway` is the only writer; resource
/// clients and the presentation layer read through [`current`](Self::current)
/// or [`observe`](Self::observe).
#[derive(Debug)]
pub struct SessionStore {
    /// Current token, replayed to new observers.
    token: Observable<Option<String>>,
    /// Durable backing storage.
    storage: Arc<dyn TokenStorage>,
    /// Storage key of the token.
    key: String,
    /// Serializes persist-then-publish so storage and memory agree.
    write_lock: Mutex<()>,
}

impl SessionStore {
    /// Recovers the session from `storage`.
    ///
    /// A persisted token is adopted only if it decodes and has not
    /// expired; otherwise the store starts empty. An expired token is left
    /// in storage until the next explicit clear.
    pub fn initialize(storage: Arc<dyn TokenStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let initial = match storage.get_item(&key) {
            Ok(Some(token)) if !TokenCodec::new().is_expired(&token) => {
                debug!(key = %key, "Recovered persisted session");
                Some(token)
            }
            Ok(Some(_)) => {
                debug!(key = %key, "Persisted token is expired or unreadable, starting logged out");
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read persisted token, starting logged out");
                None
            }
        };

        Self {
            token: Observable::new(initial),
            storage,
            key,
            write_lock: Mutex::new(()),
        }
    }

    /// Recovers the session from the file storage named in `config`.
    pub fn from_config(config: &SessionConfig) -> AppResult<Self> {
        let storage = FileTokenStorage::new(&config.storage_dir)?;
        Ok(Self::initialize(Arc::new(storage), config.token_key.clone()))
    }

    /// Replaces the current token, persists it, and notifies observers.
    pub fn set(&self, token: impl Into<String>) {
        let token = token.into();
        let _guard = self.write_lock.lock();
        if let Err(e) = self.storage.set_item(&self.key, &token) {
            warn!(key = %self.key, error = %e, "Failed to persist token; session kept in memory only");
        }
        self.token.set(Some(token));
    }

    /// Removes the current token, deletes it from storage, and notifies
    /// observers with `None`. Clearing an empty store is harmless.
    pub fn clear(&self) {
        let _guard = self.write_lock.lock();
        if let Err(e) = self.storage.remove_item(&self.key) {
            warn!(key = %self.key, error = %e, "Failed to delete persisted token");
        }
        self.token.set(None);
    }

    /// Snapshot of the current token.
    pub fn current(&self) -> Option<String> {
        self.token.get()
    }

    /// Stream of the current token followed by every change.
    pub fn observe(&self) -> Subscription<Option<String>> {
        self.token.subscribe()
    }

    /// Storage key of the token.
    pub fn key(&self) -> &str {
        &self.key
    }
}
