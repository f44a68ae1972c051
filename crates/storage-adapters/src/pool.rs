//! Connection pool construction.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// Knobs the binary reads from configuration. `acquire_timeout` bounds how
/// long any operation waits for a connection before it fails as a
/// persistence error.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

pub async fn connect(url: &str, settings: &PoolSettings) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(url)
        .await
}
