//! Configuration for the SMS gateway.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,

    /// Carrier API configuration
    pub transmit: TransmitConfig,

    /// Link shortener configuration
    pub bitly: BitlyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransmitConfig {
    /// Carrier API base URL
    #[serde(default = "default_transmit_api_url")]
    pub api_url: String,

    /// Carrier API key (Basic Auth username)
    pub api_key: String,

    /// Carrier API secret (Basic Auth password)
    pub secret: String,

    /// Country code sent with format-number requests
    #[serde(default = "default_country_code")]
    pub country_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BitlyConfig {
    /// Shortener API base URL
    #[serde(default = "default_bitly_api_url")]
    pub api_url: String,

    /// Shortener access token
    pub token: String,
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3001
}

fn default_log_level() -> String {
    "info".into()
}

fn default_transmit_api_url() -> String {
    transmit_client::DEFAULT_API_URL.into()
}

fn default_country_code() -> String {
    transmit_client::DEFAULT_COUNTRY_CODE.into()
}

fn default_bitly_api_url() -> String {
    bitly_client::DEFAULT_API_URL.into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
