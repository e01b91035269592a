pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod tools;
pub mod weather;

#[cfg(test)]
mod testutil;

use std::time::Duration;

use reqwest::Client;

use crate::config::AppConfig;

const HTTP_POOL_IDLE_TIMEOUT_SECS: u64 = 90;

/// Create the shared upstream HTTP client with connection pooling
pub fn create_http_client(config: &AppConfig) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .connect_timeout(Duration::from_secs(config.http_connect_timeout_secs))
        .pool_idle_timeout(Duration::from_secs(HTTP_POOL_IDLE_TIMEOUT_SECS))
        .pool_max_idle_per_host(10)
        .user_agent(concat!("weather-mcp/", env!("CARGO_PKG_VERSION")))
        .build()
}
