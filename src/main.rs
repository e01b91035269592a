use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_mcp::cli::{Cli, Command};
use weather_mcp::config::AppConfig;
use weather_mcp::tools::WeatherTools;
use weather_mcp::weather::WeatherService;
use weather_mcp::{create_http_client, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr: in stdio mode stdout carries protocol frames only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_mcp=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    let http_client = create_http_client(&config)?;
    tracing::debug!("Shared HTTP client created");

    let weather_service = Arc::new(WeatherService::new(
        http_client,
        &config.geocoding_url,
        &config.forecast_url,
    ));
    let tools = WeatherTools::new(weather_service);

    match cli.command() {
        Command::Stdio => server::serve_stdio(tools).await,
        Command::Http { host, port } => {
            let host = host.unwrap_or(config.host);
            let port = port.unwrap_or(config.port);
            let addr: SocketAddr = tokio::net::lookup_host((host.as_str(), port))
                .await?
                .next()
                .with_context(|| format!("could not resolve listen address {host}:{port}"))?;
            server::serve_http(tools, addr).await
        }
    }
}
