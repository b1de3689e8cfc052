//! Session persistence configuration.

use serde::{Deserialize, Serialize};

/// Where the bearer token survives between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory holding the persisted token.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
    /// Storage key of the raw token string.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            token_key: default_token_key(),
        }
    }
}

fn default_storage_dir() -> String {
    "data/session".to_string()
}

fn default_token_key() -> String {
    "auth_token".to_string()
}
