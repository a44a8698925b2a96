//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::{FetchError, GreetingPayload, GreetingSource};
use crate::core::endpoint::Endpoint;

/// A source that answers immediately with a canned result.
pub struct StaticSource {
    result: Result<Option<String>, String>,
}

impl StaticSource {
    pub fn message(message: &str) -> Self {
        Self {
            result: Ok(Some(message.to_string())),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err("connection refused".to_string()),
        }
    }
}

#[async_trait]
impl GreetingSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn fetch_greeting(&self) -> Result<GreetingPayload, FetchError> {
        match &self.result {
            Ok(message) => Ok(GreetingPayload {
                message: message.clone(),
            }),
            Err(reason) => Err(FetchError::Network(reason.clone())),
        }
    }
}

/// A source whose request never completes.
pub struct PendingSource;

#[async_trait]
impl GreetingSource for PendingSource {
    fn describe(&self) -> String {
        "pending".to_string()
    }

    async fn fetch_greeting(&self) -> Result<GreetingPayload, FetchError> {
        std::future::pending().await
    }
}

/// Answers with a fixed message and counts how often it was asked.
pub struct CountingSource {
    pub calls: Arc<AtomicUsize>,
    message: String,
}

impl CountingSource {
    pub fn new(message: &str) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl GreetingSource for CountingSource {
    fn describe(&self) -> String {
        "counting".to_string()
    }

    async fn fetch_greeting(&self) -> Result<GreetingPayload, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(GreetingPayload {
            message: Some(self.message.clone()),
        })
    }
}

/// Never completes, and records when its request starts and when it is
/// dropped (which is what an abort does to it).
#[derive(Default)]
pub struct HangingSource {
    pub started: Arc<AtomicBool>,
    pub dropped: Arc<AtomicBool>,
}

struct SetOnDrop(Arc<AtomicBool>);

impl Drop for SetOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl GreetingSource for HangingSource {
    fn describe(&self) -> String {
        "hanging".to_string()
    }

    async fn fetch_greeting(&self) -> Result<GreetingPayload, FetchError> {
        self.started.store(true, Ordering::SeqCst);
        let _guard = SetOnDrop(self.dropped.clone());
        std::future::pending().await
    }
}

pub fn test_endpoint() -> Endpoint {
    Endpoint::new("http://localhost:5000", "/api/ping").expect("valid test endpoint")
}

/// Creates a test App pointed at the default direct endpoint.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(test_endpoint())
}
