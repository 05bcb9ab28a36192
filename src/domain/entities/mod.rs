//! Core domain entities.
//!
//! Both entities are immutable value records with private fields. Neither
//! holds a reference to the other; a token belongs to a shortcut by name.
//!
//! - [`Shortcut`] - A named mapping to a destination URL
//! - [`ShortcutToken`] - The edit key that authorizes deleting a shortcut

pub mod shortcut;
pub mod token;

pub use shortcut::Shortcut;
pub use token::ShortcutToken;
