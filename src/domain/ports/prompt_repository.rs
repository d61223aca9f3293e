use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::PromptRecord;

/// Storage for drafts and published prompts.
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Store a record, returning its id.
    async fn insert(&self, record: PromptRecord) -> DomainResult<Uuid>;

    /// Fetch a record by id.
    async fn get(&self, id: Uuid) -> DomainResult<Option<PromptRecord>>;

    /// All records, oldest first.
    async fn list(&self) -> DomainResult<Vec<PromptRecord>>;
}
