//! Back-office API configuration.

use serde::{Deserialize, Serialize};

/// Where and how to reach the fee/loan REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    /// Join an API path onto the configured base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_user_agent() -> String {
    concat!("feedesk/", env!("CARGO_PKG_VERSION")).to_string()
}
