//! gb-gateway: Guess Bot Gateway Main Binary
//!
//! Main entry point for the chat bot gateway.
//!
//! Usage:
//!   gb-gateway           - Start the HTTP API server
//!   gb-gateway --help    - Show help

use std::sync::Arc;

use gb_core::{Config, DialogueRouter, GameEngine, InMemorySessionStore, NullKnowledgeBase};
use tracing_subscriber::EnvFilter;

/// Run mode
enum RunMode {
    /// HTTP API server
    Server,
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match parse_args() {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("gb-gateway {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Server => {}
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting gb-gateway...");

    // Wire the dialogue router. The knowledge base is a pluggable
    // capability; standalone deployments run on the fallback responder.
    let sessions = Arc::new(InMemorySessionStore::new());
    let engine = GameEngine::new(Arc::clone(&sessions));
    let dialogue = Arc::new(DialogueRouter::new(
        sessions,
        engine,
        Arc::new(NullKnowledgeBase),
    ));

    // Start HTTP API server
    let api_port = config.api.port;
    let handle = tokio::spawn(async move {
        if let Err(e) = gb_api::start_server(api_port, dialogue).await {
            tracing::error!("HTTP API error: {}", e);
        }
    });
    tracing::info!("HTTP API server started on port {}", api_port);

    tracing::info!("gb-gateway initialized successfully");
    tracing::info!("Press Ctrl+C to exit");

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    handle.abort();

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Parse command line arguments
fn parse_args() -> RunMode {
    let args: Vec<String> = std::env::args().collect();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return RunMode::Help,
            "--version" | "-v" => return RunMode::Version,
            _ => {}
        }
    }

    RunMode::Server
}

/// Print help message
fn print_help() {
    println!("gb-gateway - Guess Bot Gateway");
    println!();
    println!("Usage:");
    println!("  gb-gateway           Start the HTTP API server");
    println!("  gb-gateway --help    Show this help message");
    println!("  gb-gateway --version Show version");
    println!();
    println!("Environment Variables:");
    println!("  API_PORT             HTTP API port (default: 3000)");
    println!("  RUST_LOG             Log filter (default: info)");
}
