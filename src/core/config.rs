//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → deployment preset → config file → env vars → CLI flags.
//!
//! Config lives at `~/.greeter/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Deployment;
use crate::core::endpoint::{Endpoint, EndpointError};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GreeterConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub deployment: Option<Deployment>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EndpointConfig {
    pub base_url: Option<String>,
    pub path: Option<String>,
}

/// Values given on the command line. `None` means the flag was not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub deployment: Option<Deployment>,
    pub base_url: Option<String>,
    pub path: Option<String>,
}

pub const ENV_DEPLOYMENT: &str = "GREETER_DEPLOYMENT";
pub const ENV_BASE_URL: &str = "GREETER_BASE_URL";
pub const ENV_ENDPOINT_PATH: &str = "GREETER_ENDPOINT_PATH";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub deployment: Deployment,
    pub endpoint: Endpoint,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidEndpoint(EndpointError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidEndpoint(e) => write!(f, "config error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<EndpointError> for ConfigError {
    fn from(e: EndpointError) -> Self {
        ConfigError::InvalidEndpoint(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.greeter/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".greeter").join("config.toml"))
}

/// Load config from `~/.greeter/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GreeterConfig::default()`.
pub fn load_config() -> Result<GreeterConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GreeterConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GreeterConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<GreeterConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GreeterConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Greeter Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → deployment preset → this file → env vars → CLI flags.

# [general]
# deployment = "direct"              # "direct" or "proxied"

# [endpoint]
# base_url = "http://localhost:5000" # Or set GREETER_BASE_URL env var
# path = "/api/ping"                 # Or set GREETER_ENDPOINT_PATH env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config from the process environment.
pub fn resolve(config: &GreeterConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolve by collapsing: preset → config file → env vars → CLI.
///
/// `env` looks up a variable by name; tests pass a closure instead of
/// touching the process environment.
pub fn resolve_with_env<F>(
    config: &GreeterConfig,
    cli: &CliOverrides,
    env: F,
) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Deployment: CLI → env → config → default
    let deployment = cli
        .deployment
        .or_else(|| env(ENV_DEPLOYMENT).and_then(|s| parse_deployment(&s)))
        .or(config.general.deployment)
        .unwrap_or_default();

    // Base URL: CLI → env → config → preset
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env(ENV_BASE_URL))
        .or_else(|| config.endpoint.base_url.clone())
        .unwrap_or_else(|| deployment.default_base_url().to_string());

    // Path: CLI → env → config → preset
    let path = cli
        .path
        .clone()
        .or_else(|| env(ENV_ENDPOINT_PATH))
        .or_else(|| config.endpoint.path.clone())
        .unwrap_or_else(|| deployment.default_path().to_string());

    let endpoint = Endpoint::new(base_url, path)?;
    debug!("Resolved deployment={:?}, endpoint={}", deployment, endpoint);

    Ok(ResolvedConfig {
        deployment,
        endpoint,
    })
}

fn parse_deployment(value: &str) -> Option<Deployment> {
    match Deployment::from_str(value, true) {
        Ok(d) => Some(d),
        Err(_) => {
            warn!("Ignoring unknown {}={:?}", ENV_DEPLOYMENT, value);
            None
        }
    }
}
