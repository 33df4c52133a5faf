//! # aigov-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to a configurable port (default
//! 8080); an optional `TIER_TABLE` environment variable points at a
//! JSON tier table file to replace the built-in export tiers.

use aigov_core::TierTable;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    // Load a custom tier table if configured; every loaded table passes
    // the validating constructor.
    let table = match std::env::var("TIER_TABLE") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path).map_err(|e| {
                tracing::error!(path, "failed to read tier table: {e}");
                e
            })?;
            let table = TierTable::from_json(&raw).map_err(|e| {
                tracing::error!(path, "invalid tier table: {e}");
                e
            })?;
            tracing::info!(path, tiers = table.tiers().len(), "loaded custom tier table");
            table
        }
        Err(_) => TierTable::export_default(),
    };

    let state = aigov_api::AppState::with_table(table);
    let app = aigov_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("aigov API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
