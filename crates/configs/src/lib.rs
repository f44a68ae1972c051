//! # configs
//!
//! Layered configuration: coded defaults, then an optional `config.toml`,
//! then `INTAKE__`-prefixed environment variables (a `.env` file is loaded
//! first if present). Secrets stay wrapped until the consuming adapter
//! exposes them.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// No default on purpose: a deployment without an admin key should fail
    /// at startup, not fall back to a guessable value.
    pub admin: AdminConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: SecretString,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

#[derive(Debug, Deserialize)]
pub struct AdminConfig {
    pub api_key: SecretString,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

pub fn load() -> Result<AppConfig, ConfigError> {
    if dotenvy::dotenv().is_ok() {
        tracing::debug!("loaded environment from .env");
    }
    Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::with_prefix("INTAKE").separator("__"))
        .build()?
        .try_deserialize()
}
