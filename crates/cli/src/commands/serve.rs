//! Serve command - run the JSON HTTP API

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::PathBuf;
use trendscope_http::{AppState, build_router};

use crate::args::ServeArgs;
use crate::commands::{build_sources, build_summarizer};
use crate::config::AppConfig;

pub async fn execute(args: ServeArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let client = Client::new();
    let sources = build_sources(&config, &client);
    let summarizer = build_summarizer(&config, &client)?;

    let app = build_router(AppState::new(sources, summarizer));

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        addr = %addr,
        summarizer = %config.summarizer.provider,
        "trendscope listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("trendscope stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to install Ctrl+C handler"),
    }
}
