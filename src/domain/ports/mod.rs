//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that adapters must implement:
//! - SlugRegistry: existence check for candidate slugs
//! - TermStore: the set of known categories and tags
//! - EventLog: fire-and-forget publishing event journal
//! - PromptRepository: storage for drafts and published prompts
//!
//! These traits keep the preflight services independent of where terms,
//! slugs and prompts actually live.

pub mod event_log;
pub mod null_event_log;
pub mod null_slug_registry;
pub mod prompt_repository;
pub mod slug_registry;
pub mod term_store;

pub use event_log::{record_performance, EventLog};
pub use null_event_log::NullEventLog;
pub use null_slug_registry::NullSlugRegistry;
pub use prompt_repository::PromptRepository;
pub use slug_registry::SlugRegistry;
pub use term_store::TermStore;
