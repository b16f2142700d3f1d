//! Configuration loaded from environment variables.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Twilio credentials and identities
    pub twilio: TwilioConfig,

    /// Message log configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TwilioConfig {
    /// Account SID
    pub account_sid: String,

    /// Auth token
    pub auth_token: SecretString,

    /// Sender phone number (E.164)
    pub from_number: String,

    /// Verify service SID
    pub verify_service_sid: String,

    /// Messaging API host
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Verify API host
    #[serde(default = "default_verify_base_url")]
    pub verify_base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the JSON message log file
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
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

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

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

fn default_api_base_url() -> String {
    twilio_client::client::DEFAULT_API_BASE_URL.into()
}

fn default_verify_base_url() -> String {
    twilio_client::client::DEFAULT_VERIFY_BASE_URL.into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_store_path() -> PathBuf {
    PathBuf::from("messages.json")
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables use a `__` separator for nesting, e.g. `TWILIO__ACCOUNT_SID`
    /// or `SERVER__PORT`. A `.env` file is honored if present.
    pub fn load() -> Result<Self> {
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
