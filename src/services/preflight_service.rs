//! Preflight orchestration.
//!
//! Runs one request through term reconciliation, title generation, slug
//! allocation, validation and payload construction, driving a fresh
//! [`PublishingStateMachine`] along the way.

use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

use super::payload_builder::build_payload;
use super::slug_allocator::{slugify_title, SlugAllocator};
use super::term_reconciler::TermReconciler;
use super::title_generator::generate_title;
use crate::domain::errors::{DomainResult, PayloadError};
use crate::domain::models::{
    PayloadInput, PreflightRequest, PreflightResult, PublishingState, PublishingStateMachine,
    TermsInput, TitleInput, ValidationReport, MIN_CATEGORIES, MIN_TAGS, PAYLOAD_VERSION,
};
use crate::domain::ports::{record_performance, EventLog, SlugRegistry, TermStore};

/// Content shorter than this many characters draws a warning.
pub const MIN_CONTENT_LENGTH: usize = 10;

pub const SHORT_CONTENT_WARNING: &str = "Content seems too short";

/// Runs the publishing preflight.
#[derive(Clone)]
pub struct PreflightService {
    terms: TermReconciler,
    slugs: SlugAllocator,
    registry: Arc<dyn SlugRegistry>,
    events: Arc<dyn EventLog>,
}

impl PreflightService {
    pub fn new(
        store: Arc<dyn TermStore>,
        registry: Arc<dyn SlugRegistry>,
        events: Arc<dyn EventLog>,
    ) -> Self {
        Self {
            terms: TermReconciler::new(store, Arc::clone(&events)),
            slugs: SlugAllocator::new(Arc::clone(&events)),
            registry,
            events,
        }
    }

    /// Run a full preflight for `request`.
    ///
    /// Validation problems are reported in the result, not as errors; an
    /// invalid request leaves the state at `Preflight` with no payload. Term
    /// store and slug registry failures abort the run.
    #[instrument(skip_all, fields(mode = %request.mode))]
    pub async fn run_preflight(&self, request: &PreflightRequest) -> DomainResult<PreflightResult> {
        let started = Instant::now();
        let mut machine = PublishingStateMachine::new();
        machine.try_transition(PublishingState::Preflight, HashMap::new())?;

        let terms_result = self
            .terms
            .ensure_terms(&TermsInput {
                categories: request.categories.clone(),
                tags: request.tags.clone(),
            })
            .await?;

        let title = final_title(request);
        let slug = self
            .slugs
            .unique_slug(&slugify_title(&title), self.registry.as_ref())
            .await?;

        let validation = validate_request(&title, &slug, request);

        let payload = if validation.is_valid {
            Some(build_payload(PayloadInput {
                title: title.clone(),
                slug: slug.clone(),
                content: request.content.clone(),
                categories: request.categories.clone(),
                tags: request.tags.clone(),
                meta: request.metadata.clone(),
            })?)
        } else {
            None
        };

        self.events
            .info(
                "preflight_complete",
                json!({
                    "title": title,
                    "slug": slug,
                    "termsCreated": terms_result.created.len(),
                    "termsExisting": terms_result.existing.len(),
                    "valid": validation.is_valid,
                }),
            )
            .await;

        if validation.is_valid {
            let metadata = HashMap::from([
                ("slug".to_string(), Value::String(slug.clone())),
                (
                    "payload_version".to_string(),
                    Value::String(PAYLOAD_VERSION.to_string()),
                ),
            ]);
            machine.try_transition(PublishingState::ReadyToPublish, metadata)?;
        }

        info!(
            title = %title,
            slug = %slug,
            valid = validation.is_valid,
            errors = validation.errors.len(),
            warnings = validation.warnings.len(),
            "preflight complete"
        );

        record_performance(
            self.events.as_ref(),
            "preflight",
            started,
            json!({ "slug": slug, "valid": validation.is_valid }),
        )
        .await;

        Ok(PreflightResult {
            title,
            slug,
            terms_result,
            payload,
            state: machine.state(),
            validation,
        })
    }
}

/// The supplied title when non-empty, otherwise one generated from the mode,
/// its metadata and the first category.
fn final_title(request: &PreflightRequest) -> String {
    match request.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => generate_title(&TitleInput::from_metadata(
            &request.mode,
            &request.metadata,
            request.categories.first().map(String::as_str),
        )),
    }
}

/// Apply the publish rules to a request whose title and slug are settled.
///
/// Every failing rule is reported, unlike [`build_payload`] which stops at
/// the first one.
pub fn validate_request(title: &str, slug: &str, request: &PreflightRequest) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if title.is_empty() || slug.is_empty() || request.content.is_empty() {
        errors.push(PayloadError::MissingRequiredFields.to_string());
    }
    if request.categories.len() < MIN_CATEGORIES {
        errors.push(PayloadError::NoCategories.to_string());
    }
    if request.tags.len() < MIN_TAGS {
        errors.push(format!("At least {MIN_TAGS} tags are required"));
    }

    if request.content.chars().count() < MIN_CONTENT_LENGTH {
        warnings.push(SHORT_CONTENT_WARNING.to_string());
    }

    ValidationReport::from_findings(errors, warnings)
}
