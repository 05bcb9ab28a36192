//! Repository trait definitions for the domain layer.
//!
//! These are the persistence ports the core depends on. Concrete stores live
//! in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`ShortcutRepository`] - Shortcut exists/save/find/delete/list
//! - [`ShortcutTokenRepository`] - Edit key storage
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`.
//! See integration tests in `tests/repository_*.rs` for the PostgreSQL stores.

pub mod shortcut_repository;
pub mod token_repository;

pub use shortcut_repository::ShortcutRepository;
pub use token_repository::ShortcutTokenRepository;

#[cfg(test)]
pub use shortcut_repository::MockShortcutRepository;
#[cfg(test)]
pub use token_repository::MockShortcutTokenRepository;
