//! PostgreSQL implementation of shortcut repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Shortcut;
use crate::domain::repositories::ShortcutRepository;
use crate::error::AppError;
use crate::utils::db_error::{SHORTCUTS_PKEY, is_unique_violation_on};

#[derive(Debug, FromRow)]
struct ShortcutRow {
    name: String,
    destination: String,
    created_at: DateTime<Utc>,
}

impl From<ShortcutRow> for Shortcut {
    fn from(row: ShortcutRow) -> Self {
        Shortcut::new(row.name, row.destination, Some(row.created_at))
    }
}

/// PostgreSQL repository for shortcut storage and retrieval.
///
/// Uses bound parameters for every query. The `shortcuts_pkey` constraint
/// is what guarantees name uniqueness under concurrent creates.
pub struct PgShortcutRepository {
    pool: Arc<PgPool>,
}

impl PgShortcutRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortcutRepository for PgShortcutRepository {
    async fn exists(&self, name: &str) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM shortcuts WHERE name = $1)")
                .bind(name)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn save(&self, shortcut: Shortcut) -> Result<Shortcut, AppError> {
        let row = sqlx::query_as::<_, ShortcutRow>(
            r#"
            INSERT INTO shortcuts (name, destination, created_at)
            VALUES ($1, $2, $3)
            RETURNING name, destination, created_at
            "#,
        )
        .bind(shortcut.name())
        .bind(shortcut.destination())
        .bind(shortcut.created_at())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, SHORTCUTS_PKEY) {
                AppError::name_already_in_use(
                    format!(
                        "A shortcut with the name '{}' already exists",
                        shortcut.name()
                    ),
                    json!({ "name": shortcut.name() }),
                )
            } else {
                AppError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find(&self, name: &str) -> Result<Option<Shortcut>, AppError> {
        let row = sqlx::query_as::<_, ShortcutRow>(
            r#"
            SELECT name, destination, created_at
            FROM shortcuts
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Shortcut::from))
    }

    async fn delete(&self, name: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM shortcuts WHERE name = $1")
            .bind(name)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Shortcut>, AppError> {
        let rows = sqlx::query_as::<_, ShortcutRow>(
            r#"
            SELECT name, destination, created_at
            FROM shortcuts
            ORDER BY created_at DESC, name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Shortcut::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shortcuts")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
