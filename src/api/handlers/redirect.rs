//! Handler for shortcut redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcut name to its destination.
///
/// # Endpoint
///
/// `GET /{name}`
///
/// Responds with `302 Found` and the destination in `Location`. Visits are
/// not recorded.
///
/// # Errors
///
/// Returns 404 Not Found if no shortcut has this name.
pub async fn redirect_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let shortcut = state.shortcut_service.get(&name).await?;

    debug!(name, destination = shortcut.destination(), "Redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, shortcut.destination().to_string())],
    ))
}
