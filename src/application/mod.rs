//! Application layer services implementing the shortcut lifecycle.
//!
//! Services consume repository traits and the token authority, and provide
//! the API used by HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortcut_service::ShortcutService`] - Create, get, delete and authorize shortcuts
//! - [`services::token_authority::TokenAuthority`] - Edit key capability set
//!   - [`services::token_authority::DatabaseTokenAuthority`] - Stored random keys
//!   - [`services::signed_token_authority::SignedTokenAuthority`] - Unimplemented signed scheme

pub mod services;
