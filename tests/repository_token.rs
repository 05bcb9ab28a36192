use shortcuts::domain::entities::{Shortcut, ShortcutToken};
use shortcuts::domain::repositories::{ShortcutRepository, ShortcutTokenRepository};
use shortcuts::error::AppError;
use shortcuts::infrastructure::persistence::{PgShortcutRepository, PgTokenRepository};
use sqlx::PgPool;
use std::sync::Arc;

async fn seed_shortcut(pool: &Arc<PgPool>, name: &str) {
    PgShortcutRepository::new(pool.clone())
        .save(Shortcut::new(name, "https://example.com", None))
        .await
        .unwrap();
}

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let pool = Arc::new(pool);
    seed_shortcut(&pool, "docs").await;
    let repo = PgTokenRepository::new(pool);

    let created = repo
        .create(ShortcutToken::new("docs", "AbCdEf0123456789xy"))
        .await
        .unwrap();
    assert_eq!(created.value(), "AbCdEf0123456789xy");

    let found = repo.find("docs").await.unwrap().unwrap();
    assert!(found.matches(&created));
}

#[sqlx::test]
async fn test_find_missing(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    assert!(repo.find("nothing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_second_token_is_conflict(pool: PgPool) {
    let pool = Arc::new(pool);
    seed_shortcut(&pool, "once").await;
    let repo = PgTokenRepository::new(pool);

    repo.create(ShortcutToken::new("once", "first"))
        .await
        .unwrap();
    let result = repo.create(ShortcutToken::new("once", "second")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert_eq!(repo.find("once").await.unwrap().unwrap().value(), "first");
}

#[sqlx::test]
async fn test_token_for_missing_shortcut_is_conflict(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let result = repo.create(ShortcutToken::new("ghost", "key")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_delete_is_idempotent(pool: PgPool) {
    let pool = Arc::new(pool);
    seed_shortcut(&pool, "revoke").await;
    let repo = PgTokenRepository::new(pool);

    repo.create(ShortcutToken::new("revoke", "key"))
        .await
        .unwrap();

    repo.delete("revoke").await.unwrap();
    repo.delete("revoke").await.unwrap();
    assert!(repo.find("revoke").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_shortcut_delete_cascades(pool: PgPool) {
    let pool = Arc::new(pool);
    seed_shortcut(&pool, "cascade").await;
    let tokens = PgTokenRepository::new(pool.clone());
    let shortcuts = PgShortcutRepository::new(pool);

    tokens
        .create(ShortcutToken::new("cascade", "key"))
        .await
        .unwrap();
    shortcuts.delete("cascade").await.unwrap();

    assert!(tokens.find("cascade").await.unwrap().is_none());
}
