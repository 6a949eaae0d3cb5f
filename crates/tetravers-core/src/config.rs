//! Backend configuration.
//!
//! The hosted backend is reached through two values supplied by the
//! environment: the project base URL and its anonymous access key. Both are
//! mandatory; the site refuses to start without them.

use std::time::Duration;

use url::Url;

use crate::error::{TetraversError, TetraversResult};

/// Environment variable holding the backend base URL
pub const URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the backend anonymous key
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Default request timeout for backend calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for the hosted backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL, without trailing slash
    pub url: String,
    /// Anonymous (public) API key
    pub anon_key: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl BackendConfig {
    /// Build a config from explicit values, validating the URL.
    pub fn new(url: &str, anon_key: &str) -> TetraversResult<Self> {
        if url.trim().is_empty() {
            return Err(TetraversError::MissingConfig(URL_VAR));
        }
        if anon_key.trim().is_empty() {
            return Err(TetraversError::MissingConfig(ANON_KEY_VAR));
        }

        let parsed = Url::parse(url.trim())
            .map_err(|e| TetraversError::InvalidConfig(format!("{URL_VAR}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TetraversError::InvalidConfig(format!(
                "{URL_VAR}: unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self {
            url: url.trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.trim().to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read the config from process environment variables.
    pub fn from_env() -> TetraversResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the config through an arbitrary key lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> TetraversResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(TetraversError::MissingConfig(URL_VAR))?;
        let anon_key = lookup(ANON_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(TetraversError::MissingConfig(ANON_KEY_VAR))?;
        Self::new(&url, &anon_key)
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// PostgREST endpoint for a table.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}
