//! Durable token storage backends.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::debug;

use feedesk_core::error::{AppError, ErrorKind};
use feedesk_core::result::AppResult;
use feedesk_core::traits::TokenStorage;

/// Stores each key as a file under a directory, holding the raw value.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    /// Directory holding one file per key.
    root: PathBuf,
}

impl FileTokenStorage {
    /// Create a storage rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create session directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Directory this storage writes to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(AppError::storage(format!("Invalid storage key: {key}")));
        }
        Ok(self.root.join(key))
    }
}

impl TokenStorage for FileTokenStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.resolve(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read {}", path.display()),
                    e,
                ));
            }
        };

        let value = String::from_utf8(bytes)
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Stored value is not UTF-8", e))?;
        let value = value.trim();
        Ok((!value.is_empty()).then(|| value.to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        let tmp = self.root.join(format!(".{key}.tmp"));

        let mut file = open_private(&tmp)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp, &path)?;
        debug!(key, "Persisted value");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "Removed persisted value");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn open_private(path: &Path) -> AppResult<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    Ok(fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> AppResult<fs::File> {
    Ok(fs::File::create(path)?)
}

/// Process-local storage; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with one entry.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.items.write().insert(key.into(), value.into());
        storage
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.items.write().remove(key);
        Ok(())
    }
}
