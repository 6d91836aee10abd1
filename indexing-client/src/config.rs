//! Configuration types for the indexing client.

use std::env;

use url::Url;

use crate::errors::IndexingClientError;

/// Default base URL of the indexing service.
pub const DEFAULT_INDEXING_SERVICE_URL: &str = "http://indexing-service:8082";

/// Environment variable that overrides the base URL.
pub const INDEXING_SERVICE_URL_VAR: &str = "INDEXING_SERVICE_URL";

/// Configuration for the indexing client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexingClientConfig {
    /// Base URL prefix that every request path is appended to
    /// (e.g., "http://indexing-service:8082").
    pub base_url: String,
}

impl Default for IndexingClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INDEXING_SERVICE_URL.to_string(),
        }
    }
}

impl IndexingClientConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load the config from the environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// # Environment Variables
    ///
    /// - `INDEXING_SERVICE_URL`: indexing service base URL (default: http://indexing-service:8082)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(INDEXING_SERVICE_URL_VAR) {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Validate the base URL and return it with trailing slashes removed.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The normalised prefix, safe to append `/api/...` paths to
    /// * `Err(IndexingClientError::ConfigError)` - If the URL is empty, unparsable,
    ///   not http(s), or carries a query or fragment
    pub fn validated_base_url(&self) -> Result<String, IndexingClientError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(IndexingClientError::config("base URL must not be empty"));
        }

        let parsed = Url::parse(trimmed).map_err(|e| {
            IndexingClientError::config(format!("Invalid base URL '{}': {}", trimmed, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(IndexingClientError::config(format!(
                "Unsupported scheme '{}' in base URL",
                parsed.scheme()
            )));
        }
        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            return Err(IndexingClientError::config(format!(
                "Base URL '{}' has no host",
                trimmed
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(IndexingClientError::config(format!(
                "Base URL '{}' must not carry a query or fragment",
                trimmed
            )));
        }

        Ok(trimmed.to_string())
    }
}
