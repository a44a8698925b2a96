//! # Endpoint
//!
//! The network address queried for the greeting: a base URL plus a path.
//! The two are kept apart so a deployment preset can swap one without the
//! other, but the rest of the app only ever sees the joined URL.

use std::fmt;

use reqwest::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
    path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointError {
    pub url: String,
    pub reason: String,
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid endpoint '{}': {}", self.url, self.reason)
    }
}

impl std::error::Error for EndpointError {}

impl Endpoint {
    /// Builds an endpoint and checks that the joined URL is absolute.
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Result<Self, EndpointError> {
        let endpoint = Self {
            base_url: base_url.into(),
            path: path.into(),
        };
        let url = endpoint.url();
        let parsed = Url::parse(&url).map_err(|e| EndpointError {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(EndpointError {
                url,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        Ok(endpoint)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base URL and path joined with exactly one `/`.
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
