//! Storage implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`PgShortcutRepository`] - Shortcut storage in PostgreSQL
//! - [`PgTokenRepository`] - Edit key storage in PostgreSQL
//! - [`MemoryStore`] - In-process backend providing both repositories

pub mod memory;
pub mod pg_shortcut_repository;
pub mod pg_token_repository;

pub use memory::{MemoryShortcutRepository, MemoryStore, MemoryTokenRepository};
pub use pg_shortcut_repository::PgShortcutRepository;
pub use pg_token_repository::PgTokenRepository;
