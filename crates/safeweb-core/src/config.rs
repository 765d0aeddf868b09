// SPDX-License-Identifier: Apache-2.0

//! Configuration management for safeweb.
//!
//! Configuration is read once at startup into an [`AppConfig`] and passed
//! explicitly to whatever needs it.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `SAFEWEB_`)
//! 2. Config file: `--config <path>`, or `~/.config/safeweb/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Shorten the ping timeout and provide the secret key
//! SAFEWEB_PING__TIMEOUT_SECONDS=2 SAFEWEB_APP__SECRET_KEY=... safeweb
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

use crate::error::SafewebError;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application-wide settings.
    pub app: AppSettings,
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Ping command settings.
    pub ping: PingConfig,
    /// User database settings.
    pub database: DatabaseConfig,
}

/// Application-wide settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Enable debug logging.
    pub debug: bool,
    /// Application secret key. Never logged.
    #[serde(deserialize_with = "deserialize_secret")]
    pub secret_key: Option<SecretString>,
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(SecretString::from))
}

/// HTTP listener settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Ping command settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PingConfig {
    /// Program to execute.
    pub program: String,
    /// Time budget for the whole command, in seconds.
    pub timeout_seconds: u64,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            program: "ping".to_string(),
            timeout_seconds: 5,
        }
    }
}

/// User database settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    pub path: PathBuf,
    /// Maximum pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("users.db"),
            max_connections: 4,
        }
    }
}

impl AppConfig {
    /// Rejects settings that deserialize but cannot work.
    ///
    /// # Errors
    ///
    /// Returns `SafewebError::Config` if `ping.timeout_seconds` is zero.
    pub fn validate(&self) -> Result<(), SafewebError> {
        if self.ping.timeout_seconds == 0 {
            return Err(SafewebError::Config {
                message: "ping.timeout_seconds must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Returns the safeweb configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/safeweb`. Falls back to the working
/// directory when no home directory is known.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("safeweb");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("safeweb")
}

/// Returns the path to the default configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load configuration from the default file location and environment.
///
/// # Errors
///
/// Returns `SafewebError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, SafewebError> {
    load_config_from(None)
}

/// Load configuration, optionally from an explicit file.
///
/// An explicit path must exist; the default path is optional. Environment
/// variables use the prefix `SAFEWEB_` and double underscore for nested keys
/// (e.g., `SAFEWEB_SERVER__PORT`).
///
/// # Errors
///
/// Returns `SafewebError::Config` if a file is missing or invalid, a
/// value has the wrong type, or [`AppConfig::validate`] rejects the result.
pub fn load_config_from(path: Option<&Path>) -> Result<AppConfig, SafewebError> {
    let file = match path {
        Some(p) => File::from(p).required(true),
        None => File::from(config_file_path()).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("SAFEWEB")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    app_config.validate()?;

    Ok(app_config)
}
