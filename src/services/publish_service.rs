//! Draft and publish steps that follow a successful preflight.

use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::errors::{DomainError, PublishError};
use crate::domain::models::{
    DraftReceipt, EventLevel, PostPayload, PreflightResult, PromptRecord, PromptStatus,
    PublishReceipt, PublishingState, PublishingStateMachine,
};
use crate::domain::ports::{EventLog, PromptRepository, SlugRegistry};

const DEFAULT_VALIDATION_ERROR: &str = "Cannot publish with validation errors";

/// Stores preflighted payloads as drafts or published prompts.
#[derive(Clone)]
pub struct PublishService {
    repository: Arc<dyn PromptRepository>,
    registry: Arc<dyn SlugRegistry>,
    events: Arc<dyn EventLog>,
}

impl PublishService {
    pub fn new(
        repository: Arc<dyn PromptRepository>,
        registry: Arc<dyn SlugRegistry>,
        events: Arc<dyn EventLog>,
    ) -> Self {
        Self {
            repository,
            registry,
            events,
        }
    }

    /// Save `payload` as a draft. The slug is reserved once stored.
    #[instrument(skip_all, fields(slug = %payload.slug()))]
    pub async fn create_draft(&self, payload: &PostPayload) -> Result<DraftReceipt, PublishError> {
        let record = PromptRecord::from_payload(payload, PromptStatus::Draft);
        let id = self.repository.insert(record).await?;
        self.registry.reserve(payload.slug()).await?;

        info!(%id, "draft created");
        self.events
            .info(
                "draft_created",
                json!({ "id": id, "title": payload.title(), "slug": payload.slug() }),
            )
            .await;

        Ok(DraftReceipt { draft_id: id })
    }

    /// Publish the payload carried by a preflight result.
    ///
    /// Invalid results are rejected with their validation errors before the
    /// payload is looked at. Results whose state cannot move to `Published`
    /// are rejected before anything is stored. A repository failure moves the
    /// attempt to `Failed` and is returned to the caller.
    #[instrument(skip_all, fields(slug = %result.slug))]
    pub async fn publish(&self, result: &PreflightResult) -> Result<PublishReceipt, PublishError> {
        if !result.validation.is_valid {
            let errors = if result.validation.errors.is_empty() {
                vec![DEFAULT_VALIDATION_ERROR.to_string()]
            } else {
                result.validation.errors.clone()
            };
            return Err(PublishError::ValidationFailed(errors));
        }

        let payload = result.payload.as_ref().ok_or(PublishError::MissingPayload)?;
        let mut machine = PublishingStateMachine::with_state(result.state);
        if !machine.can_transition(PublishingState::Published) {
            return Err(DomainError::InvalidStateTransition {
                from: result.state,
                to: PublishingState::Published,
            }
            .into());
        }

        let record = PromptRecord::from_payload(payload, PromptStatus::Published);
        let stored = match self.repository.insert(record).await {
            Ok(id) => self.registry.reserve(payload.slug()).await.map(|()| id),
            Err(e) => Err(e),
        };

        let id = match stored {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "publish failed");
                machine.transition_with(
                    PublishingState::Failed,
                    HashMap::from([("error".to_string(), Value::String(e.to_string()))]),
                );
                self.events
                    .record(
                        "publish_failed",
                        json!({ "slug": payload.slug(), "error": e.to_string() }),
                        EventLevel::Error,
                    )
                    .await;
                return Err(e.into());
            }
        };

        machine.try_transition(
            PublishingState::Published,
            HashMap::from([("published_id".to_string(), json!(id))]),
        )?;

        info!(%id, "prompt published");
        self.events
            .info(
                "prompt_published",
                json!({ "id": id, "title": payload.title(), "slug": payload.slug() }),
            )
            .await;

        Ok(PublishReceipt {
            published_id: id,
            url: format!("/prompts/{id}"),
            state: machine.state(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryEventLog, InMemoryPromptRepository, InMemorySlugRegistry, InMemoryTermStore,
    };
    use crate::domain::errors::DomainResult;
    use crate::domain::models::{PreflightRequest, TermsConfig, ValidationReport};
    use crate::services::PreflightService;
    use async_trait::async_trait;
    use serde_json::Map;
    use uuid::Uuid;

    struct BrokenRepository;

    #[async_trait]
    impl PromptRepository for BrokenRepository {
        async fn insert(&self, _record: PromptRecord) -> DomainResult<Uuid> {
            Err(DomainError::RepositoryFailed("disk full".to_string()))
        }

        async fn get(&self, _id: Uuid) -> DomainResult<Option<PromptRecord>> {
            Ok(None)
        }

        async fn list(&self) -> DomainResult<Vec<PromptRecord>> {
            Ok(Vec::new())
        }
    }

    struct Fixture {
        preflight: PreflightService,
        publish: PublishService,
        repository: Arc<InMemoryPromptRepository>,
        registry: Arc<InMemorySlugRegistry>,
        events: Arc<InMemoryEventLog>,
    }

    fn fixture() -> Fixture {
        let repository = Arc::new(InMemoryPromptRepository::new());
        let registry = Arc::new(InMemorySlugRegistry::new());
        let events = Arc::new(InMemoryEventLog::new());
        Fixture {
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

    fn agent_request() -> PreflightRequest {
        let mut metadata = Map::new();
        metadata.insert("agentName".to_string(), json!("Dr. Data"));
        metadata.insert("mode".to_string(), json!("agent"));
        PreflightRequest {
            title: None,
            content: "You are Dr. Data, a friendly analytics assistant.".to_string(),
            categories: vec!["data-analysis".to_string()],
            tags: vec![
                "agent".to_string(),
                "python".to_string(),
                "assistant".to_string(),
            ],
            mode: "agent".to_string(),
            metadata,
        }
    }

    #[tokio::test]
    async fn test_publish_valid_result() {
        let f = fixture();
        let result = f.preflight.run_preflight(&agent_request()).await.unwrap();
        let receipt = f.publish.publish(&result).await.unwrap();

        assert_eq!(receipt.state, PublishingState::Published);
        assert_eq!(receipt.url, format!("/prompts/{}", receipt.published_id));

        let stored = f.repository.get(receipt.published_id).await.unwrap().unwrap();
        assert_eq!(stored.status, PromptStatus::Published);
        assert_eq!(stored.mode, "agent");
        assert_eq!(stored.slug, "dr-data-ai-assistant");
        assert!(f.registry.exists("dr-data-ai-assistant").await.unwrap());
        assert_eq!(f.events.named("prompt_published").len(), 1);
    }

    #[tokio::test]
    async fn test_published_slug_not_reused() {
        let f = fixture();
        let first = f.preflight.run_preflight(&agent_request()).await.unwrap();
        f.publish.publish(&first).await.unwrap();

        let second = f.preflight.run_preflight(&agent_request()).await.unwrap();
        assert_ne!(second.slug, first.slug);
        assert!(second.slug.starts_with("dr-data-ai-assistant-"));
    }

    #[tokio::test]
    async fn test_create_draft() {
        let f = fixture();
        let result = f.preflight.run_preflight(&agent_request()).await.unwrap();
        let receipt = f
            .publish
            .create_draft(result.payload.as_ref().unwrap())
            .await
            .unwrap();

        let stored = f.repository.get(receipt.draft_id).await.unwrap().unwrap();
        assert_eq!(stored.status, PromptStatus::Draft);
        assert_eq!(stored.title, "Dr. Data - AI Assistant");

        let drafted = f.events.named("draft_created");
        assert_eq!(drafted.len(), 1);
        assert_eq!(drafted[0].data["slug"], "dr-data-ai-assistant");
    }

    #[tokio::test]
    async fn test_invalid_result_rejected() {
        let f = fixture();
        let request = PreflightRequest {
            tags: vec!["agent".to_string()],
            ..agent_request()
        };
        let result = f.preflight.run_preflight(&request).await.unwrap();

        match f.publish.publish(&result).await.unwrap_err() {
            PublishError::ValidationFailed(errors) => {
                assert_eq!(errors, vec!["At least 3 tags are required".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(f.repository.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_without_errors_uses_default_message() {
        let f = fixture();
        let result = PreflightResult {
            title: "T".to_string(),
            slug: "t".to_string(),
            terms_result: Default::default(),
            payload: None,
            state: PublishingState::Preflight,
            validation: ValidationReport::default(),
        };

        match f.publish.publish(&result).await.unwrap_err() {
            PublishError::ValidationFailed(errors) => {
                assert_eq!(errors, vec![DEFAULT_VALIDATION_ERROR.to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_valid_result_without_payload() {
        let f = fixture();
        let mut result = f.preflight.run_preflight(&agent_request()).await.unwrap();
        result.payload = None;

        let err = f.publish.publish(&result).await.unwrap_err();
        assert!(matches!(err, PublishError::MissingPayload));
        assert_eq!(err.to_string(), "Payload is required");
    }

    #[tokio::test]
    async fn test_already_published_result_stores_nothing() {
        let f = fixture();
        let mut result = f.preflight.run_preflight(&agent_request()).await.unwrap();
        result.state = PublishingState::Published;

        let err = f.publish.publish(&result).await.unwrap_err();
        assert!(matches!(
            err,
            PublishError::Domain(DomainError::InvalidStateTransition {
                from: PublishingState::Published,
                to: PublishingState::Published,
            })
        ));
        assert!(f.repository.list().await.unwrap().is_empty());
        assert!(!f.registry.exists(&result.slug).await.unwrap());
        assert!(f.events.named("prompt_published").is_empty());
    }

    #[tokio::test]
    async fn test_repository_failure_marks_failed() {
        let f = fixture();
        let result = f.preflight.run_preflight(&agent_request()).await.unwrap();
        let publish = PublishService::new(
            Arc::new(BrokenRepository),
            f.registry.clone(),
            f.events.clone(),
        );

        let err = publish.publish(&result).await.unwrap_err();
        assert!(matches!(
            err,
            PublishError::Domain(DomainError::RepositoryFailed(_))
        ));

        let failed = f.events.named("publish_failed");
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].level, EventLevel::Error);
        assert!(!f.registry.exists("dr-data-ai-assistant").await.unwrap());
    }
}
