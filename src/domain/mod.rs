//! Domain layer for the publishing preflight
//!
//! This module contains the publishing models, the ports that connect them
//! to infrastructure, and the domain error types.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{DomainError, DomainResult, PayloadError, PublishError};
