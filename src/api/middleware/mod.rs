//! HTTP middleware and extractors for request processing.
//!
//! Provides edit-key extraction and request tracing.

pub mod auth;
pub mod tracing;
