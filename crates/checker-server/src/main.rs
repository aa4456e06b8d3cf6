//! Supplement checker static host
//!
//! Axum server for the Leptos WASM bundle. Bundle files are served as-is;
//! every other GET gets the shell so client-side routing can take over.

mod config;
mod error;
mod handlers;
mod router;
mod state;

use checker_core::AppRoute;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::router::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG can come from .env
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::load(config.clone())?;
    tracing::info!("✓ Serving bundle from {}", config.static_dir.display());

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("🚀 checker-server running on http://{}", config.bind_addr);
    tracing::info!("Routes:");
    for route in AppRoute::ALL {
        tracing::info!("  {:<8} - {}", route.path(), route.page_name());
    }
    tracing::info!("  GET /health - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}
