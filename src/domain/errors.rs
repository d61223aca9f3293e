//! Domain errors for the publishing preflight.

use thiserror::Error;

use super::models::PublishingState;

/// Reasons a publish payload cannot be constructed.
///
/// Checked in declaration order; the first failing rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Missing required fields: title, slug, or content")]
    MissingRequiredFields,

    #[error("At least one category is required")]
    NoCategories,

    #[error("At least {required} tags are required (got {actual})")]
    TooFewTags { required: usize, actual: usize },
}

/// Domain-level errors that can occur while running a preflight or publish.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Slug lookup failed for '{slug}': {reason}")]
    SlugLookupFailed { slug: String, reason: String },

    #[error("Term store failure: {0}")]
    TermStoreFailed(String),

    #[error("Prompt repository failure: {0}")]
    RepositoryFailed(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        from: PublishingState,
        to: PublishingState,
    },

    #[error("Payload rejected: {0}")]
    Payload(#[from] PayloadError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

/// Errors surfaced by the draft/publish step.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Payload is required")]
    MissingPayload,

    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
