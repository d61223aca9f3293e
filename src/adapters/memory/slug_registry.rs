//! In-memory slug registry.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::SlugRegistry;

/// Remembers every slug reserved through it for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemorySlugRegistry {
    taken: Mutex<HashSet<String>>,
}

impl InMemorySlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that already considers `slugs` taken.
    pub fn with_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: Mutex::new(slugs.into_iter().map(Into::into).collect()),
        }
    }

    fn poisoned(slug: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::SlugLookupFailed {
            slug: slug.to_string(),
            reason: format!("slug registry mutex poisoned: {e}"),
        }
    }
}

#[async_trait]
impl SlugRegistry for InMemorySlugRegistry {
    async fn exists(&self, slug: &str) -> DomainResult<bool> {
        let taken = self.taken.lock().map_err(|e| Self::poisoned(slug, e))?;
        Ok(taken.contains(slug))
    }

    async fn reserve(&self, slug: &str) -> DomainResult<()> {
        let mut taken = self.taken.lock().map_err(|e| Self::poisoned(slug, e))?;
        taken.insert(slug.to_string());
        Ok(())
    }
}
