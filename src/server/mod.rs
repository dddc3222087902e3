// src/server/mod.rs
// =============================================================================
// HTTP API: the same crawl the CLI runs, behind GET /emails?domain=...
//
// Submodules:
// - routes: URL -> handler table
// - handlers: request parsing, running the crawl, JSON responses
//
// Every request crawls in its own tokio task with its own frontier, so a slow
// crawl never blocks other clients. The shared state below is read-only.
// =============================================================================

mod handlers;
mod routes;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::ServerConfig;
use crate::crawl::Crawler;

pub use routes::create_routes;

#[derive(Clone)]
pub struct AppState {
    pub crawler: Arc<Crawler>,
    /// Requests whose crawl runs longer than this get a 504
    pub crawl_timeout: Duration,
}

// Binds the listener and serves until Ctrl-C
pub async fn serve(config: ServerConfig, crawler: Crawler) -> Result<()> {
    let state = AppState {
        crawler: Arc::new(crawler),
        crawl_timeout: config.crawl_timeout,
    };
    let app = create_routes(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Starting server on {}", addr);
    tracing::info!("Try: curl 'http://localhost:{}/emails?domain=example.com'", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        // Without a signal handler, just keep serving
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
