//! Placeholder for a self-contained signed token scheme.

use async_trait::async_trait;
use serde_json::json;

use crate::application::services::TokenAuthority;
use crate::domain::entities::ShortcutToken;
use crate::error::AppError;

/// Signed-token variant of [`TokenAuthority`].
///
/// Declared so the service can be wired against an alternative scheme, but
/// not implemented: every operation fails with [`AppError::Unsupported`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SignedTokenAuthority;

impl SignedTokenAuthority {
    pub fn new() -> Self {
        Self
    }

    fn unsupported(operation: &'static str) -> AppError {
        AppError::unsupported(
            "Signed tokens are not supported",
            json!({ "operation": operation }),
        )
    }
}

#[async_trait]
impl TokenAuthority for SignedTokenAuthority {
    async fn find_token(&self, _shortcut_name: &str) -> Result<Option<ShortcutToken>, AppError> {
        Err(Self::unsupported("find_token"))
    }

    async fn create_token(&self, _shortcut_name: &str) -> Result<ShortcutToken, AppError> {
        Err(Self::unsupported("create_token"))
    }

    async fn delete_token(&self, _shortcut_name: &str) -> Result<(), AppError> {
        Err(Self::unsupported("delete_token"))
    }

    async fn is_valid(&self, _candidate: &ShortcutToken) -> Result<bool, AppError> {
        Err(Self::unsupported("is_valid"))
    }
}
