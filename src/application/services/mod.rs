//! Business logic services for the application layer.

pub mod shortcut_service;
pub mod signed_token_authority;
pub mod token_authority;

pub use shortcut_service::ShortcutService;
pub use signed_token_authority::SignedTokenAuthority;
pub use token_authority::{DatabaseTokenAuthority, TokenAuthority};
