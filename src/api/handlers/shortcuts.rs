//! Handlers for shortcut creation and deletion.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::MessageResponse;
use crate::api::dto::create_shortcut::{
    CreateShortcutRequest, CreateShortcutResponse, CreatedShortcut,
};
use crate::api::middleware::auth::ShortcutKey;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::extract_origin;
use crate::utils::url_normalizer::normalize_destination;

/// Creates a shortcut and issues its edit key.
///
/// # Endpoint
///
/// `POST /api/shortcuts`
///
/// # Request Body
///
/// ```json
/// {
///   "destination": "https://example.com",
///   "name": "docs"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`, see [`CreateShortcutResponse`]. The `URL` and `edit`
/// values are built from the request's own protocol and `Host`.
///
/// # Errors
///
/// - 400 if the body is malformed or fails validation, including a
///   destination that is not an `http`/`https` URL with a host
/// - 400 if `name` is already taken
/// - 400 if the `Host` header is missing
/// - 503 if no free random name was found
pub async fn create_shortcut_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateShortcutRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortcutResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::validation(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let destination = normalize_destination(&payload.destination).map_err(|e| {
        AppError::validation(
            e.to_string(),
            json!({ "field": "destination", "value": payload.destination }),
        )
    })?;

    let origin = extract_origin(&headers, state.behind_proxy)?;

    let shortcut = state
        .shortcut_service
        .create(destination, payload.name)
        .await?;
    let token = state.shortcut_service.get_token(&shortcut).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateShortcutResponse {
            message: format!("Created shortcut with name {}", shortcut.name()),
            data: CreatedShortcut {
                shortcut: shortcut.name().to_string(),
                edit: origin.edit_url(&token),
                url: origin.shortcut_url(shortcut.name()),
            },
        }),
    ))
}

/// Deletes a shortcut when the bearer token is its edit key.
///
/// # Endpoint
///
/// `DELETE /api/shortcuts/{name}`
///
/// # Headers
///
/// ```text
/// Authorization: Bearer <key>
/// ```
///
/// # Errors
///
/// - 400 if the `Authorization` header is missing or not a bearer token
/// - 401 if the key does not belong to this shortcut
/// - 404 if no shortcut has this name
pub async fn delete_shortcut_handler(
    State(state): State<AppState>,
    ShortcutKey(key): ShortcutKey,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state
        .shortcut_service
        .is_authorized_by_token(&name, &key)
        .await?
    {
        return Err(AppError::unauthorized(
            "Unauthorized",
            json!({ "name": name }),
        ));
    }

    state.shortcut_service.delete(&name).await?;

    Ok(Json(MessageResponse::new(format!(
        "Shortcut '{name}' has been removed"
    ))))
}
