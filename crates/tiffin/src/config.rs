//! Client configuration and its one-time resolution.
//!
//! The API key is taken from, in order: the explicit builder value, the
//! `LUNCH_MONEY_API_KEY` environment variable. If neither yields a non-empty
//! key, resolution fails before any request is built.

use std::fmt::{Debug, Formatter};

use crate::error::ClientError;

pub const API_KEY_ENV: &str = "LUNCH_MONEY_API_KEY";
pub const DEFAULT_ENDPOINT: &str = "https://dev.lunchmoney.app";
pub const DEFAULT_VERSION: &str = "v1";

/// Unresolved client settings.
#[derive(Clone, Default)]
pub struct ClientConfig {
    api_key: Option<String>,
    endpoint: Option<String>,
    version: Option<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty key is treated as absent and falls back to the environment.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Custom API root, e.g. a staging host or a local mock server.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn resolve(self) -> Result<ResolvedConfig, ClientError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using a custom environment lookup.
    pub fn resolve_with<F>(self, lookup: F) -> Result<ResolvedConfig, ClientError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let api_key = match self.api_key.filter(|key| !key.is_empty()) {
            Some(key) => key,
            None => lookup(API_KEY_ENV)
                .filter(|key| !key.is_empty())
                .ok_or(ClientError::MissingApiKey)?,
        };

        let endpoint = self
            .endpoint
            .filter(|endpoint| !endpoint.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        let version = self.version.unwrap_or_else(|| DEFAULT_VERSION.to_owned());

        Ok(ResolvedConfig {
            base_url: join_base_url(&endpoint, &version),
            api_key,
        })
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("version", &self.version)
            .finish()
    }
}

/// Settings fixed for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    base_url: String,
    api_key: String,
}

impl ResolvedConfig {
    /// Always ends with exactly one `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Debug for ResolvedConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// `root` + `/` + `version` + `/`, with exactly one separator at each joint.
pub fn join_base_url(root: &str, version: &str) -> String {
    let root = root.trim_end_matches('/');
    let version = version.trim_matches('/');
    if version.is_empty() {
        format!("{root}/")
    } else {
        format!("{root}/{version}/")
    }
}
