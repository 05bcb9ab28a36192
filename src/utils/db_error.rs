//! Helpers for classifying storage errors.

use crate::error::AppError;

/// Name of the primary key constraint on `shortcuts.name`.
pub const SHORTCUTS_PKEY: &str = "shortcuts_pkey";

/// Name of the unique constraint on `shortcut_tokens.shortcut_name`.
pub const SHORTCUT_TOKENS_NAME_KEY: &str = "shortcut_tokens_shortcut_name_key";

/// Returns true if `e` is a unique violation on the given constraint.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}

/// Returns true if `e` is a [`AppError::Conflict`] raised by storage.
pub fn is_conflict(e: &AppError) -> bool {
    matches!(e, AppError::Conflict { .. })
}
