//! Route Wiring

use axum::{
    Router,
    routing::{MethodRouter, get},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{health_check, spa_fallback};
use crate::state::AppState;

/// Build the static host: health, bundle files, then the shell fallback
pub fn build_router(state: AppState) -> Router {
    let shell: MethodRouter = get(spa_fallback).with_state(state.clone());
    let bundle = ServeDir::new(&state.config.static_dir).fallback(shell);

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
