//! PostgreSQL implementation of shortcut token repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::ShortcutToken;
use crate::domain::repositories::ShortcutTokenRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct TokenRow {
    shortcut_name: String,
    token: String,
}

impl From<TokenRow> for ShortcutToken {
    fn from(row: TokenRow) -> Self {
        ShortcutToken::new(row.shortcut_name, row.token)
    }
}

/// PostgreSQL repository for shortcut edit keys.
///
/// `shortcut_tokens.shortcut_name` is unique and references `shortcuts`
/// with `ON DELETE CASCADE`, so removing a shortcut removes its key.
pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortcutTokenRepository for PgTokenRepository {
    async fn find(&self, shortcut_name: &str) -> Result<Option<ShortcutToken>, AppError> {
        let row = sqlx::query_as::<_, TokenRow>(
            r#"
            SELECT shortcut_name, token
            FROM shortcut_tokens
            WHERE shortcut_name = $1
            "#,
        )
        .bind(shortcut_name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortcutToken::from))
    }

    async fn create(&self, token: ShortcutToken) -> Result<ShortcutToken, AppError> {
        let row = sqlx::query_as::<_, TokenRow>(
            r#"
            INSERT INTO shortcut_tokens (shortcut_name, token)
            VALUES ($1, $2)
            RETURNING shortcut_name, token
            "#,
        )
        .bind(token.shortcut_name())
        .bind(token.value())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, shortcut_name: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM shortcut_tokens WHERE shortcut_name = $1")
            .bind(shortcut_name)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
