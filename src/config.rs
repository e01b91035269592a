use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::weather::{FORECAST_API_URL, GEOCODING_API_URL};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// HTTP transport bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP transport port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Open-Meteo geocoding search endpoint
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Open-Meteo forecast endpoint
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,

    /// Total timeout for one upstream request
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    #[serde(default = "default_http_connect_timeout_secs")]
    pub http_connect_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// `PORT` is honoured for container platforms that inject it
fn default_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000)
}

fn default_geocoding_url() -> String {
    GEOCODING_API_URL.to_string()
}

fn default_forecast_url() -> String {
    FORECAST_API_URL.to_string()
}

fn default_http_timeout_secs() -> u64 {
    30
}

fn default_http_connect_timeout_secs() -> u64 {
    5
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            .set_default("host", default_host())?
            .set_default("port", default_port())?
            // Load from config file if present
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // Override with environment variables (prefixed with WEATHER_MCP_)
            .add_source(
                Environment::with_prefix("WEATHER_MCP")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
