//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::sync::Arc;
use tempfile::TempDir;

use promptinator::adapters::memory::{
    InMemoryEventLog, InMemoryPromptRepository, InMemorySlugRegistry, InMemoryTermStore,
};
use promptinator::domain::models::{PreflightRequest, TermsConfig};
use promptinator::services::{PreflightService, PublishService};

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
#[allow(dead_code)]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Services wired to in-memory adapters, with handles on the shared ones.
#[allow(dead_code)]
pub struct TestServices {
    pub preflight: PreflightService,
    pub publish: PublishService,
    pub repository: Arc<InMemoryPromptRepository>,
    pub registry: Arc<InMemorySlugRegistry>,
    pub events: Arc<InMemoryEventLog>,
}

/// Build services over the default seed terms and an empty slug registry.
#[allow(dead_code)]
pub fn test_services() -> TestServices {
    let repository = Arc::new(InMemoryPromptRepository::new());
    let registry = Arc::new(InMemorySlugRegistry::new());
    let events = Arc::new(InMemoryEventLog::new());

    TestServices {
        preflight: PreflightService::new(
            Arc::new(InMemoryTermStore::from_config(&TermsConfig::default())),
            registry.clone(),
            events.clone(),
        ),
        publish: PublishService::new(repository.clone(), registry.clone(), events.clone()),
        repository,
        registry,
        events,
    }
}

/// Build a request from string slices.
#[allow(dead_code)]
pub fn request(
    mode: &str,
    metadata: serde_json::Value,
    categories: &[&str],
    tags: &[&str],
    content: &str,
) -> PreflightRequest {
    PreflightRequest {
        title: None,
        content: content.to_string(),
        categories: categories.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        mode: mode.to_string(),
        metadata: metadata.as_object().cloned().unwrap_or_default(),
    }
}
