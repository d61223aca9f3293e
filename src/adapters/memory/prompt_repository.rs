//! In-memory prompt repository.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::PromptRecord;
use crate::domain::ports::PromptRepository;

/// Keeps stored prompts in insertion order. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryPromptRepository {
    records: Mutex<Vec<PromptRecord>>,
}

impl InMemoryPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Vec<PromptRecord>>> {
        self.records
            .lock()
            .map_err(|e| DomainError::RepositoryFailed(format!("prompt store mutex poisoned: {e}")))
    }
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn insert(&self, record: PromptRecord) -> DomainResult<Uuid> {
        let id = record.id;
        self.lock()?.push(record);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> DomainResult<Option<PromptRecord>> {
        Ok(self.lock()?.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<PromptRecord>> {
        Ok(self.lock()?.clone())
    }
}
