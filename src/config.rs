//! Runtime configuration for the gateway

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gateway settings, loaded from `F1_GATEWAY_*` environment variables on
/// top of the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the Jolpica archive (Ergast-compatible)
    #[serde(default = "default_jolpica_base_url")]
    pub jolpica_base_url: String,

    /// Base URL of the OpenF1 live provider
    #[serde(default = "default_openf1_base_url")]
    pub openf1_base_url: String,

    /// Per-request upstream timeout in seconds
    ///
    /// A hung provider call must not pin the request indefinitely.
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8001
}
fn default_jolpica_base_url() -> String {
    "https://api.jolpi.ca/ergast/f1".to_string()
}
fn default_openf1_base_url() -> String {
    "https://api.openf1.org/v1".to_string()
}
fn default_upstream_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            jolpica_base_url: default_jolpica_base_url(),
            openf1_base_url: default_openf1_base_url(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from the environment
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("F1_GATEWAY").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Upstream timeout as a [`Duration`]
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
