//! Greeter library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Where the greeting backend is reached from.
///
/// Both presets resolve to a single [`crate::core::endpoint::Endpoint`]; they only
/// pick the defaults that the config file, env vars and CLI flags override.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// Talk to the backend directly (cross-origin).
    #[default]
    Direct,
    /// Go through the dev server, which proxies `/api` to the backend.
    Proxied,
}

impl Deployment {
    pub fn default_base_url(self) -> &'static str {
        match self {
            Deployment::Direct => "http://localhost:5000",
            Deployment::Proxied => "http://localhost:5173",
        }
    }

    pub fn default_path(self) -> &'static str {
        match self {
            Deployment::Direct => "/api/ping",
            Deployment::Proxied => "/api/data",
        }
    }
}
