//! Promptinator - Publishing Preflight
//!
//! Promptinator checks a prompt before it is published: it reconciles its
//! categories and tags against the known terms, derives a title and a unique
//! slug, validates the publish minimums and assembles a normalized payload,
//! tracking each attempt with a small publishing state machine.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Publishing models, port traits and errors
//! - **Service Layer** (`services`): Preflight pipeline and publish step
//! - **Adapters** (`adapters`): In-memory implementations of the ports
//! - **Infrastructure Layer** (`infrastructure`): Config, logging, event journal
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use promptinator::adapters::memory::InMemoryTermStore;
//! use promptinator::domain::models::{PreflightRequest, TermsConfig};
//! use promptinator::domain::ports::{NullEventLog, NullSlugRegistry};
//! use promptinator::services::PreflightService;
//!
//! # async fn run() -> promptinator::DomainResult<()> {
//! let service = PreflightService::new(
//!     Arc::new(InMemoryTermStore::from_config(&TermsConfig::default())),
//!     Arc::new(NullSlugRegistry),
//!     Arc::new(NullEventLog),
//! );
//!
//! let result = service.run_preflight(&PreflightRequest {
//!     content: "Summarize the attached report in five bullet points.".to_string(),
//!     categories: vec!["business-marketing".to_string()],
//!     tags: vec!["template".into(), "summary".into(), "report".into()],
//!     mode: "template".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! assert!(result.validation.is_valid);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult, PayloadError, PublishError};
pub use domain::models::{
    Config, PostPayload, PreflightRequest, PreflightResult, PublishingState,
    PublishingStateMachine, TermsResult, TitleInput, ValidationReport,
};
pub use domain::ports::{EventLog, PromptRepository, SlugRegistry, TermStore};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{PreflightService, PublishService};
