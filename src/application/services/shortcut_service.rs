//! Shortcut lifecycle service: create, look up, authorize and delete.

use std::sync::Arc;

use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, info, warn};

use crate::application::services::TokenAuthority;
use crate::domain::entities::{Shortcut, ShortcutToken};
use crate::domain::repositories::ShortcutRepository;
use crate::error::AppError;
use crate::utils::db_error::is_conflict;
use crate::utils::generator::{Generator, NAME_LENGTH};

/// Total number of random names tried before giving up.
pub const MAX_NAME_ATTEMPTS: usize = 5;

/// Outcome of a single random-name attempt.
#[derive(Debug)]
enum NameAttempt {
    /// Candidate was taken, either at the existence check or at insert time.
    Collision,
    Failed(AppError),
}

/// Service orchestrating shortcut state transitions.
///
/// A shortcut goes `NonExistent -> Active` on [`create`](Self::create) and
/// `Active -> Deleted` on [`delete`](Self::delete). Nothing else changes it.
///
/// Existence checks here race with concurrent writers. Storage uniqueness
/// constraints are the backstop: a unique violation on the name is reported
/// as [`AppError::NameAlreadyInUse`] (or retried for generated names), and a
/// lost get-or-create race on the token is resolved by re-reading.
pub struct ShortcutService<R, A>
where
    R: ShortcutRepository + ?Sized,
    A: TokenAuthority + ?Sized,
{
    repository: Arc<R>,
    token_authority: Arc<A>,
    generator: Arc<dyn Generator>,
}

impl<R, A> ShortcutService<R, A>
where
    R: ShortcutRepository + ?Sized,
    A: TokenAuthority + ?Sized,
{
    /// Creates a new shortcut service.
    pub fn new(repository: Arc<R>, token_authority: Arc<A>, generator: Arc<dyn Generator>) -> Self {
        Self {
            repository,
            token_authority,
            generator,
        }
    }

    /// Creates a shortcut pointing at `destination`.
    ///
    /// # Naming
    ///
    /// - If `name` is provided, it is used as-is unless it is already taken
    /// - Otherwise a random 6-character name is generated, trying at most
    ///   [`MAX_NAME_ATTEMPTS`] candidates
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NameAlreadyInUse`] if the supplied name exists; no
    /// write is performed in that case.
    /// Returns [`AppError::GenerationExhausted`] if every generated candidate
    /// collided.
    /// Returns [`AppError::Persistence`] on storage errors.
    pub async fn create(
        &self,
        destination: String,
        name: Option<String>,
    ) -> Result<Shortcut, AppError> {
        let shortcut = match name {
            Some(name) => {
                if self.repository.exists(&name).await? {
                    return Err(name_in_use(&name));
                }

                self.repository
                    .save(Shortcut::new(name, destination, None))
                    .await?
            }
            None => self.create_with_generated_name(&destination).await?,
        };

        metrics::counter!("shortcuts_created_total").increment(1);
        info!(
            name = shortcut.name(),
            destination = shortcut.destination(),
            "Shortcut created"
        );

        Ok(shortcut)
    }

    /// Deletes a shortcut.
    ///
    /// The token is not removed here; storage cascades the delete to it. For
    /// a store without cascading, call [`revoke_token`](Self::revoke_token)
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no shortcut has this name.
    pub async fn delete(&self, name: &str) -> Result<(), AppError> {
        self.get(name).await?;

        if !self.repository.delete(name).await? {
            return Err(not_found(name));
        }

        metrics::counter!("shortcuts_deleted_total").increment(1);
        info!(name, "Shortcut deleted");

        Ok(())
    }

    /// Retrieves a shortcut by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no shortcut has this name.
    pub async fn get(&self, name: &str) -> Result<Shortcut, AppError> {
        self.repository
            .find(name)
            .await?
            .ok_or_else(|| not_found(name))
    }

    /// Lists the newest shortcuts first.
    pub async fn list_new(&self, limit: i64, offset: i64) -> Result<Vec<Shortcut>, AppError> {
        self.repository.list(limit, offset).await
    }

    /// Counts live shortcuts.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks that shortcut storage is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Returns the shortcut's edit key, issuing one if it has none yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the key could not be issued and no
    /// concurrently issued key exists either (e.g. the shortcut was deleted
    /// in the meantime).
    pub async fn get_token(&self, shortcut: &Shortcut) -> Result<ShortcutToken, AppError> {
        if let Some(token) = self.token_authority.find_token(shortcut.name()).await? {
            return Ok(token);
        }

        match self.token_authority.create_token(shortcut.name()).await {
            Ok(token) => Ok(token),
            Err(e) if is_conflict(&e) => {
                debug!(
                    name = shortcut.name(),
                    "Edit key issued concurrently, re-reading"
                );
                self.token_authority
                    .find_token(shortcut.name())
                    .await?
                    .ok_or(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Removes the shortcut's edit key. The next [`get_token`](Self::get_token)
    /// issues a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no shortcut has this name.
    pub async fn revoke_token(&self, name: &str) -> Result<(), AppError> {
        let shortcut = self.get(name).await?;
        self.token_authority.delete_token(shortcut.name()).await?;

        info!(name, "Edit key revoked");
        Ok(())
    }

    /// Checks whether `token_value` is the edit key of shortcut `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no shortcut has this name, rather
    /// than `Ok(false)`.
    pub async fn is_authorized_by_token(
        &self,
        name: &str,
        token_value: &str,
    ) -> Result<bool, AppError> {
        let candidate = ShortcutToken::new(name, token_value);
        let shortcut = self.get(name).await?;

        let authorized = candidate.shortcut_name() == shortcut.name()
            && self.token_authority.is_valid(&candidate).await?;

        if !authorized {
            metrics::counter!("shortcut_auth_failures_total").increment(1);
            warn!(name, "Rejected edit key");
        }

        Ok(authorized)
    }

    async fn create_with_generated_name(&self, destination: &str) -> Result<Shortcut, AppError> {
        // Zero delay between attempts; the first try is not counted by the strategy.
        let strategy = FixedInterval::from_millis(0).take(MAX_NAME_ATTEMPTS - 1);

        RetryIf::spawn(
            strategy,
            || self.try_generated_name(destination),
            |e: &NameAttempt| matches!(e, NameAttempt::Collision),
        )
        .await
        .map_err(|e| match e {
            NameAttempt::Collision => AppError::generation_exhausted(
                "Failed to generate a unique shortcut name",
                json!({ "attempts": MAX_NAME_ATTEMPTS }),
            ),
            NameAttempt::Failed(err) => err,
        })
    }

    async fn try_generated_name(&self, destination: &str) -> Result<Shortcut, NameAttempt> {
        let name = self.generator.generate(NAME_LENGTH);

        if self
            .repository
            .exists(&name)
            .await
            .map_err(NameAttempt::Failed)?
        {
            metrics::counter!("shortcut_name_collisions_total").increment(1);
            debug!(name, "Generated shortcut name already in use");
            return Err(NameAttempt::Collision);
        }

        match self
            .repository
            .save(Shortcut::new(name, destination, None))
            .await
        {
            Ok(shortcut) => Ok(shortcut),
            Err(AppError::NameAlreadyInUse { .. }) => {
                metrics::counter!("shortcut_name_collisions_total").increment(1);
                Err(NameAttempt::Collision)
            }
            Err(e) => Err(NameAttempt::Failed(e)),
        }
    }
}

fn not_found(name: &str) -> AppError {
    AppError::not_found(
        format!("No shortcut with name {name} found"),
        json!({ "name": name }),
    )
}

fn name_in_use(name: &str) -> AppError {
    AppError::name_already_in_use(
        format!("A shortcut with the name '{name}' already exists"),
        json!({ "name": name }),
    )
}
