//! Transport bindings: stdio, SSE and streamable HTTP.
//!
//! All three hand out clones of the same [`WeatherTools`], so the business
//! logic and report formatting exist exactly once.

use std::net::SocketAddr;

use axum::{routing::get, Json, Router};
use rmcp::{
    transport::{
        sse_server::{SseServer, SseServerConfig},
        stdio,
        streamable_http_server::{session::local::LocalSessionManager, StreamableHttpService},
    },
    ServiceExt,
};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::tools::WeatherTools;

pub const SSE_PATH: &str = "/sse";
pub const MESSAGES_PATH: &str = "/messages";
pub const STREAMABLE_HTTP_PATH: &str = "/mcp";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub server: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        server: "fencode-weather-mcp",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Serve on stdin/stdout until the client disconnects
pub async fn serve_stdio(tools: WeatherTools) -> anyhow::Result<()> {
    tracing::info!("MCP weather server started on stdio");

    let service = tools.serve(stdio()).await?;
    service.waiting().await?;

    tracing::info!("MCP weather server stopped");
    Ok(())
}

/// Build the complete HTTP router.
///
/// SSE sessions live until `ct` is cancelled. The streamable HTTP endpoint
/// builds a fresh handler per session.
pub fn build_router(tools: WeatherTools, bind: SocketAddr, ct: CancellationToken) -> Router {
    let (sse_server, sse_router) = SseServer::new(SseServerConfig {
        bind,
        sse_path: SSE_PATH.to_string(),
        post_path: MESSAGES_PATH.to_string(),
        ct,
        sse_keep_alive: None,
    });
    let sse_tools = tools.clone();
    sse_server.with_service(move || sse_tools.clone());

    let streamable = StreamableHttpService::new(
        move || Ok(tools.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    Router::new()
        .route("/health", get(health))
        .nest_service(STREAMABLE_HTTP_PATH, streamable)
        .merge(sse_router)
        .layer(TraceLayer::new_for_http())
}

/// Serve SSE and streamable HTTP on one listener until Ctrl-C/SIGTERM
pub async fn serve_http(tools: WeatherTools, addr: SocketAddr) -> anyhow::Result<()> {
    let ct = CancellationToken::new();
    let app = build_router(tools, addr, ct.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!("MCP HTTP server listening on {}", local);
    tracing::info!("SSE endpoint: http://{}{}", local, SSE_PATH);
    tracing::info!("Messages endpoint: http://{}{}", local, MESSAGES_PATH);
    tracing::info!("Streamable HTTP endpoint: http://{}{}", local, STREAMABLE_HTTP_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            ct.cancel();
        })
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
