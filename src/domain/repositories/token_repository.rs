//! Repository trait for shortcut edit keys.

use crate::domain::entities::ShortcutToken;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for shortcut tokens.
///
/// Implementations must allow at most one token per shortcut name and drop
/// the token when its shortcut is deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryTokenRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_token.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortcutTokenRepository: Send + Sync {
    /// Finds the token for a shortcut.
    ///
    /// Absence is `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn find(&self, shortcut_name: &str) -> Result<Option<ShortcutToken>, AppError>;

    /// Stores a token and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the shortcut already has a token or
    /// does not exist.
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn create(&self, token: ShortcutToken) -> Result<ShortcutToken, AppError>;

    /// Removes the token for a shortcut. No-op if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn delete(&self, shortcut_name: &str) -> Result<(), AppError>;
}
