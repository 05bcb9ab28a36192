//! Shared application state passed to all HTTP handlers.

use std::sync::Arc;

use crate::application::services::{ShortcutService, TokenAuthority};
use crate::domain::repositories::ShortcutRepository;

/// Shortcut service over type-erased storage and token scheme, as wired by
/// [`crate::server::build_state`].
pub type DynShortcutService = ShortcutService<dyn ShortcutRepository, dyn TokenAuthority>;

/// Application state shared across all request handlers.
///
/// Cloned per request by Axum; the service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub shortcut_service: Arc<DynShortcutService>,
    /// Trust `X-Forwarded-Proto` when building response URLs.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(shortcut_service: Arc<DynShortcutService>, behind_proxy: bool) -> Self {
        Self {
            shortcut_service,
            behind_proxy,
        }
    }
}
