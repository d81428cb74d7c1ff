//! HTTP API
//!
//! `GET /search` and `GET /health` over a shared [`AddressSearch`], with
//! permissive CORS.

pub mod handlers;

use crate::search::AddressSearch;
use axum::{routing::get, Router};
use handlers::{handle_health, handle_search};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the router
pub fn router(search: Arc<AddressSearch>) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/search", get(handle_search))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(search)
}

/// Bind `host:port`; `host` may be an IP address or a resolvable name
pub async fn bind(host: &str, port: u16) -> std::io::Result<TcpListener> {
    TcpListener::bind((host, port)).await
}

/// Serve on `listener` until Ctrl-C
pub async fn serve(listener: TcpListener, search: Arc<AddressSearch>) -> std::io::Result<()> {
    info!("Address Finder API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(search))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        // Never resolve so the server keeps running
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
