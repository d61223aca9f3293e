//! Infrastructure layer module
//!
//! This module contains the infrastructure pieces around the publishing
//! services:
//! - Configuration management
//! - Diagnostic logging
//! - The publishing event journal
//! - Project setup and service wiring
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod event_log;
pub mod logging;
pub mod setup;
