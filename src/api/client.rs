//! HTTP client for the greeting endpoint.
//!
//! One GET, no body, default headers, no auth, no retries and no timeout.
//! Every failure comes back as a [`FetchError`]; deciding what to show for
//! it is the caller's job.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::GreetingPayload;
use crate::core::endpoint::Endpoint;

/// Errors that can occur while fetching the greeting.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The endpoint answered with a non-2xx status.
    Status { status: u16, body: String },
    /// The body was not a JSON greeting payload.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status, body } => {
                write!(f, "endpoint error (HTTP {status}): {body}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Something that can produce the greeting payload.
#[async_trait]
pub trait GreetingSource: Send + Sync {
    /// Human-readable description of where the greeting comes from.
    fn describe(&self) -> String;

    async fn fetch_greeting(&self) -> Result<GreetingPayload, FetchError>;
}

/// Fetches the greeting over HTTP from a configured [`Endpoint`].
pub struct HttpGreetingSource {
    endpoint: Endpoint,
    client: reqwest::Client,
}

impl HttpGreetingSource {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl GreetingSource for HttpGreetingSource {
    fn describe(&self) -> String {
        self.endpoint.url()
    }

    async fn fetch_greeting(&self) -> Result<GreetingPayload, FetchError> {
        let url = self.endpoint.url();
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Greeting response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Greeting endpoint error: {} - {}", status, body);
            return Err(FetchError::Status { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Greeting body: {} bytes", bytes.len());

        serde_json::from_slice::<GreetingPayload>(&bytes).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
