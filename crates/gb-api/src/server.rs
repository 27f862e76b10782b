//! HTTP API Server
//!
//! Starts and manages the axum-based HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use gb_core::DialogueRouter;

use crate::error::Result;
use crate::routes::routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dialogue: Arc<DialogueRouter>,
}

/// Start the HTTP API server
pub async fn start_server(port: u16, dialogue: Arc<DialogueRouter>) -> Result<()> {
    let state = AppState { dialogue };

    let app = Router::new()
        .merge(routes())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("HTTP API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
