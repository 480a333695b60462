//! Backend API configuration.
//!
//! # Environment Variables
//!
//! - `API_BASE_URL`: Base URL of the REST backend (default: `http://localhost:8000/api`)
//! - `API_TOKEN`: Bearer token forwarded on every request (default: none)
//! - `API_TIMEOUT_SECONDS`: Whole-request timeout (default: `30`)
//! - `API_CONNECT_TIMEOUT_SECONDS`: Connection timeout (default: `10`)

use std::time::Duration;

use crate::parse_env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: std::env::var("API_BASE_URL")
                .map(|url| normalize_base_url(&url))
                .unwrap_or(defaults.base_url),
            token: std::env::var("API_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            timeout: parse_env::<u64>("API_TIMEOUT_SECONDS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            connect_timeout: parse_env::<u64>("API_CONNECT_TIMEOUT_SECONDS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
        }
    }

    /// Returns a copy pointing at another backend.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    /// Joins a relative resource path onto the base URL.
    ///
    /// ```ignore
    /// let config = ApiConfig::default();
    /// assert_eq!(config.url("/teachers"), "http://localhost:8000/api/teachers");
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
