//! Prediction backend connection settings.

use serde::{Deserialize, Serialize};

/// Endpoint the form posts to when nothing overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";

fn default_endpoint() -> String {
    String::from(DEFAULT_ENDPOINT)
}

fn default_user_agent() -> String {
    String::from("salp/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Full URL of the `/predict` endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds. `None` waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl BackendConfig {
    /// Only plain `http://` and `https://` endpoints are accepted.
    #[must_use]
    pub fn has_http_endpoint(&self) -> bool {
        let endpoint = self.endpoint.trim();
        ["http://", "https://"].iter().any(|scheme| {
            endpoint
                .strip_prefix(scheme)
                .is_some_and(|rest| !rest.is_empty())
        })
    }

    /// The user agent must be a legal HTTP header value: no control
    /// characters other than tab.
    #[must_use]
    pub fn has_header_safe_user_agent(&self) -> bool {
        self.user_agent
            .bytes()
            .all(|b| b == b'\t' || (b >= 0x20 && b != 0x7f))
    }
}
