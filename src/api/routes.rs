//! API route configuration.
//!
//! Creation is public. Deletion is guarded per shortcut by its edit key,
//! see [`crate::api::middleware::auth::ShortcutKey`].

use crate::api::handlers::{create_shortcut_handler, delete_shortcut_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Shortcut management routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /shortcuts`         - Create a shortcut and issue its edit key
/// - `DELETE /shortcuts/{name}`  - Delete a shortcut (edit key required)
pub fn shortcut_routes() -> Router<AppState> {
    Router::new()
        .route("/shortcuts", post(create_shortcut_handler))
        .route("/shortcuts/{name}", delete(delete_shortcut_handler))
}
