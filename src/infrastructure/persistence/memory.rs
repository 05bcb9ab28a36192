//! In-process storage backend.
//!
//! Mirrors the SQL schema's guarantees: unique shortcut names, at most one
//! token per shortcut, tokens only for existing shortcuts, and token removal
//! when the owning shortcut is deleted. Contents are lost on restart.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Shortcut, ShortcutToken};
use crate::domain::repositories::{ShortcutRepository, ShortcutTokenRepository};
use crate::error::AppError;
use crate::utils::db_error::{SHORTCUT_TOKENS_NAME_KEY, SHORTCUTS_PKEY};

#[derive(Default)]
struct Tables {
    shortcuts: HashMap<String, Shortcut>,
    tokens: HashMap<String, ShortcutToken>,
}

/// Shared tables behind both memory repositories.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortcut repository view of this store.
    pub fn shortcuts(&self) -> MemoryShortcutRepository {
        MemoryShortcutRepository {
            store: self.clone(),
        }
    }

    /// Token repository view of this store.
    pub fn tokens(&self) -> MemoryTokenRepository {
        MemoryTokenRepository {
            store: self.clone(),
        }
    }
}

/// [`ShortcutRepository`] over a [`MemoryStore`].
#[derive(Clone)]
pub struct MemoryShortcutRepository {
    store: MemoryStore,
}

/// [`ShortcutTokenRepository`] over a [`MemoryStore`].
#[derive(Clone)]
pub struct MemoryTokenRepository {
    store: MemoryStore,
}

#[async_trait]
impl ShortcutRepository for MemoryShortcutRepository {
    async fn exists(&self, name: &str) -> Result<bool, AppError> {
        Ok(self.store.tables.read().await.shortcuts.contains_key(name))
    }

    async fn save(&self, shortcut: Shortcut) -> Result<Shortcut, AppError> {
        let mut tables = self.store.tables.write().await;

        if tables.shortcuts.contains_key(shortcut.name()) {
            return Err(AppError::name_already_in_use(
                format!(
                    "A shortcut with the name '{}' already exists",
                    shortcut.name()
                ),
                json!({ "name": shortcut.name(), "constraint": SHORTCUTS_PKEY }),
            ));
        }

        tables
            .shortcuts
            .insert(shortcut.name().to_string(), shortcut.clone());
        Ok(shortcut)
    }

    async fn find(&self, name: &str) -> Result<Option<Shortcut>, AppError> {
        Ok(self.store.tables.read().await.shortcuts.get(name).cloned())
    }

    async fn delete(&self, name: &str) -> Result<bool, AppError> {
        let mut tables = self.store.tables.write().await;

        let removed = tables.shortcuts.remove(name).is_some();
        if removed {
            tables.tokens.remove(name);
        }
        Ok(removed)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Shortcut>, AppError> {
        let tables = self.store.tables.read().await;

        let mut shortcuts: Vec<Shortcut> = tables.shortcuts.values().cloned().collect();
        shortcuts.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.name().cmp(b.name()))
        });

        Ok(shortcuts
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let len = self.store.tables.read().await.shortcuts.len();
        Ok(i64::try_from(len).unwrap_or(i64::MAX))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl ShortcutTokenRepository for MemoryTokenRepository {
    async fn find(&self, shortcut_name: &str) -> Result<Option<ShortcutToken>, AppError> {
        Ok(self
            .store
            .tables
            .read()
            .await
            .tokens
            .get(shortcut_name)
            .cloned())
    }

    async fn create(&self, token: ShortcutToken) -> Result<ShortcutToken, AppError> {
        let mut tables = self.store.tables.write().await;

        if !tables.shortcuts.contains_key(token.shortcut_name()) {
            return Err(AppError::conflict(
                "Constraint violation",
                json!({ "constraint": "shortcut_tokens_shortcut_name_fkey" }),
            ));
        }
        if tables.tokens.contains_key(token.shortcut_name()) {
            return Err(AppError::conflict(
                "Constraint violation",
                json!({ "constraint": SHORTCUT_TOKENS_NAME_KEY }),
            ));
        }

        tables
            .tokens
            .insert(token.shortcut_name().to_string(), token.clone());
        Ok(token)
    }

    async fn delete(&self, shortcut_name: &str) -> Result<(), AppError> {
        self.store.tables.write().await.tokens.remove(shortcut_name);
        Ok(())
    }
}
