//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{name}`  - Shortcut redirect (public)
//! - `GET  /health`  - Health check (public)
//! - `/api/*`        - Shortcut management, see [`crate::api::routes`]
//!
//! `/health` and `/api` are registered as static segments and win over the
//! `/{name}` capture, which is why those names are reserved at creation.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and tracing without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{name}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::shortcut_routes())
        .with_state(state)
        .layer(tracing::layer())
}
