use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod board;
mod config;
mod dashboard;
mod sheets;

use config::Config;
use dashboard::AppState;
use sheets::{GoogleSheetsClient, JsonFileSource, SheetRanges, SheetSource, SnapshotCache};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let source = build_source(&config)?;
    info!(
        "Sheet source: {} (cache ttl {:?}, default min edge {})",
        source.name(),
        config.cache_ttl(),
        config.min_edge
    );

    let cache = SnapshotCache::new(source, config.cache_ttl(), config.cover_header_index());

    // Warm the cache so a misconfigured sheet shows up in the logs at startup.
    // The server still starts; the page shows the error state with a retry.
    match cache.refresh().await {
        Ok(payload) => info!(
            "Initial snapshot: {} predictions, {} cover rows",
            payload.predictions.len(),
            payload.cover_analysis.len()
        ),
        Err(e) => tracing::warn!("Initial sheet fetch failed: {}", e),
    }

    let app = dashboard::router(AppState {
        cache,
        default_min_edge: config.min_edge,
    });
    let addr: SocketAddr = config
        .dashboard_addr
        .parse()
        .with_context(|| format!("Invalid DASHBOARD_ADDR '{}'", config.dashboard_addr))?;
    info!("Dashboard listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run dashboard server (blocks until shutdown)
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_source(config: &Config) -> Result<Arc<dyn SheetSource>> {
    if let Some(path) = &config.data_file {
        info!("Serving local snapshot {}", path.display());
        return Ok(Arc::new(JsonFileSource::new(path)));
    }

    let sheet_id = config
        .sheet_id
        .as_deref()
        .context("SHEET_ID is required unless --data-file is given")?;
    let access_token = config.resolve_access_token()?;
    let ranges = SheetRanges {
        predictions: config.predictions_range.clone(),
        cover_analysis: config.cover_range.clone(),
        results: config.results_range.clone(),
    };
    let client = GoogleSheetsClient::new(
        &config.sheets_api_url,
        sheet_id,
        ranges,
        config.sheets_api_key.clone(),
        access_token,
        config.http_timeout(),
    )
    .context("Failed to build Sheets API client")?;
    Ok(Arc::new(client))
}
