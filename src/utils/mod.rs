//! Utility functions used across the application.
//!
//! - [`generator`] - Random fixed-alphabet names and edit keys
//! - [`request_origin`] - Protocol/host extraction for response URLs
//! - [`db_error`] - Storage error classification
//! - [`url_normalizer`] - Destination scheme checks and canonical form

pub mod db_error;
pub mod generator;
pub mod request_origin;
pub mod url_normalizer;
