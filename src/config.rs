//! Client configuration — access key and base URL.
//!
//! Set once at construction and read-only afterwards. Requests run with the
//! transport's default timeout; there is no per-client override.

use crate::network::DEFAULT_API_URL;

/// Environment variable holding the API access key.
pub const API_KEY_ENV: &str = "NOMICS_API_KEY";

/// Environment variable overriding the base URL.
pub const API_URL_ENV: &str = "NOMICS_API_URL";

/// Per-client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Access key sent as the `key` query parameter. Required for every call.
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

// Hand-written so the key never ends up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ClientConfig {
    /// Defaults overridden by `NOMICS_API_KEY` / `NOMICS_API_URL` when set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        config.api_key = non_empty(API_KEY_ENV);
        if let Some(url) = non_empty(API_URL_ENV) {
            config.base_url = url;
        }
        config
    }

    /// Base URL with exactly one trailing slash, so `base + action` is well-formed.
    pub fn normalized_base_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}
