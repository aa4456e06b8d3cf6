//! HTTP Handlers

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};
use checker_core::AppRoute;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub routes: &'static [AppRoute],
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        routes: &AppRoute::ALL,
    })
}

/// Serve the shell for any path that is not a bundle file.
///
/// The client decides what to render; the status only reports whether the
/// path is in the route table.
pub async fn spa_fallback(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    let status = match AppRoute::resolve(uri.path()) {
        Some(route) => {
            tracing::debug!("Deep link {} -> {}", uri.path(), route.page_name());
            StatusCode::OK
        }
        None => {
            tracing::debug!("No route for {}", uri.path());
            StatusCode::NOT_FOUND
        }
    };

    (status, Html(state.index_html.to_string()))
}
