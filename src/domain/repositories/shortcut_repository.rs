//! Repository trait for shortcut storage.

use crate::domain::entities::Shortcut;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for shortcuts.
///
/// Implementations must enforce uniqueness of `name`. The service performs an
/// existence check before inserting, but that check races with concurrent
/// creates; the storage constraint is what actually guarantees uniqueness.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortcutRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryShortcutRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_shortcut.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortcutRepository: Send + Sync {
    /// Returns whether a shortcut with this name exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn exists(&self, name: &str) -> Result<bool, AppError>;

    /// Stores a new shortcut and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NameAlreadyInUse`] if the name is already taken.
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn save(&self, shortcut: Shortcut) -> Result<Shortcut, AppError>;

    /// Finds a shortcut by name.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Shortcut))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn find(&self, name: &str) -> Result<Option<Shortcut>, AppError>;

    /// Removes a shortcut. Its token goes with it (storage-level cascade).
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn delete(&self, name: &str) -> Result<bool, AppError>;

    /// Lists shortcuts, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Shortcut>, AppError>;

    /// Counts live shortcuts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that storage answers, without touching shortcut rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if storage is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
