//! Token authority: issues, looks up, invalidates and verifies edit keys.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::ShortcutToken;
use crate::domain::repositories::ShortcutTokenRepository;
use crate::error::AppError;
use crate::utils::generator::{Generator, TOKEN_LENGTH};

/// Capability set for possession tokens.
///
/// [`crate::application::services::ShortcutService`] depends only on this
/// trait, so token schemes can be swapped without touching the lifecycle
/// logic.
///
/// # Implementations
///
/// - [`DatabaseTokenAuthority`] - Random keys stored next to the shortcut
/// - [`crate::application::services::SignedTokenAuthority`] - Unimplemented signed scheme
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenAuthority: Send + Sync {
    /// Looks up the live token for a shortcut. Absence is `Ok(None)`.
    async fn find_token(&self, shortcut_name: &str) -> Result<Option<ShortcutToken>, AppError>;

    /// Issues and stores a new token for a shortcut.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if storage rejects the insert (the
    /// shortcut already has a token). Uniqueness is not pre-checked.
    async fn create_token(&self, shortcut_name: &str) -> Result<ShortcutToken, AppError>;

    /// Removes the token for a shortcut. Idempotent.
    async fn delete_token(&self, shortcut_name: &str) -> Result<(), AppError>;

    /// Returns true iff a token is stored for `candidate.shortcut_name()` and
    /// it equals `candidate` field for field.
    async fn is_valid(&self, candidate: &ShortcutToken) -> Result<bool, AppError>;
}

/// [`TokenAuthority`] that stores random 18-character keys through a
/// [`ShortcutTokenRepository`].
pub struct DatabaseTokenAuthority<R: ShortcutTokenRepository + ?Sized> {
    repository: Arc<R>,
    generator: Arc<dyn Generator>,
}

impl<R: ShortcutTokenRepository + ?Sized> DatabaseTokenAuthority<R> {
    /// Creates a new token authority.
    ///
    /// # Arguments
    ///
    /// - `repository` - token storage
    /// - `generator` - source of random key values
    pub fn new(repository: Arc<R>, generator: Arc<dyn Generator>) -> Self {
        Self {
            repository,
            generator,
        }
    }
}

#[async_trait]
impl<R: ShortcutTokenRepository + ?Sized> TokenAuthority for DatabaseTokenAuthority<R> {
    async fn find_token(&self, shortcut_name: &str) -> Result<Option<ShortcutToken>, AppError> {
        self.repository.find(shortcut_name).await
    }

    async fn create_token(&self, shortcut_name: &str) -> Result<ShortcutToken, AppError> {
        let token = ShortcutToken::new(shortcut_name, self.generator.generate(TOKEN_LENGTH));
        let stored = self.repository.create(token).await?;

        debug!(shortcut = shortcut_name, "Issued edit key");
        Ok(stored)
    }

    async fn delete_token(&self, shortcut_name: &str) -> Result<(), AppError> {
        self.repository.delete(shortcut_name).await
    }

    async fn is_valid(&self, candidate: &ShortcutToken) -> Result<bool, AppError> {
        let stored = self.repository.find(candidate.shortcut_name()).await?;

        Ok(stored.is_some_and(|token| token.matches(candidate)))
    }
}
