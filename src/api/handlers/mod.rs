//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod shortcuts;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shortcuts::{create_shortcut_handler, delete_shortcut_handler};
