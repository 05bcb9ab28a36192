//! Shortcut entity: a named mapping from a short identifier to a destination URL.

use chrono::{DateTime, Utc};

/// A live shortcut.
///
/// Immutable once constructed. The `name` is the identity and primary key;
/// neither it nor the destination ever changes while the shortcut is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    name: String,
    destination: String,
    created_at: DateTime<Utc>,
}

impl Shortcut {
    /// Creates a shortcut.
    ///
    /// `created_at` defaults to the current time when not supplied, which is
    /// the case for freshly created shortcuts. Rows reconstructed from storage
    /// pass their stored timestamp.
    pub fn new(
        name: impl Into<String>,
        destination: impl Into<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
            created_at: created_at.unwrap_or_else(Utc::now),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
