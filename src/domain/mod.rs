//! Domain layer containing business entities and persistence ports.
//!
//! # Architecture
//!
//! - [`entities`] - Shortcut and token value records
//! - [`repositories`] - Storage contracts implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Lifecycle logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
