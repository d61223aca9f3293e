//! In-memory term store.
//!
//! Lives for the lifetime of the process. Terms can be added but never
//! removed.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{TermKind, TermsConfig};
use crate::domain::ports::TermStore;

#[derive(Debug, Default)]
struct KnownTerms {
    categories: HashSet<String>,
    tags: HashSet<String>,
}

impl KnownTerms {
    fn set_mut(&mut self, kind: TermKind) -> &mut HashSet<String> {
        match kind {
            TermKind::Category => &mut self.categories,
            TermKind::Tag => &mut self.tags,
        }
    }

    fn set(&self, kind: TermKind) -> &HashSet<String> {
        match kind {
            TermKind::Category => &self.categories,
            TermKind::Tag => &self.tags,
        }
    }
}

/// Term store backed by two mutex-guarded hash sets.
#[derive(Debug, Default)]
pub struct InMemoryTermStore {
    terms: Mutex<KnownTerms>,
}

impl InMemoryTermStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `categories` and `tags`.
    ///
    /// Seeds are stored as given; callers are expected to pass normalized
    /// terms.
    pub fn with_terms<C, T>(categories: C, tags: T) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            terms: Mutex::new(KnownTerms {
                categories: categories.into_iter().map(Into::into).collect(),
                tags: tags.into_iter().map(Into::into).collect(),
            }),
        }
    }

    /// Create a store seeded from configuration.
    pub fn from_config(config: &TermsConfig) -> Self {
        Self::with_terms(config.categories.clone(), config.tags.clone())
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, KnownTerms>> {
        self.terms
            .lock()
            .map_err(|e| DomainError::TermStoreFailed(format!("term store mutex poisoned: {e}")))
    }
}

#[async_trait]
impl TermStore for InMemoryTermStore {
    async fn insert(&self, kind: TermKind, term: &str) -> DomainResult<bool> {
        Ok(self.lock()?.set_mut(kind).insert(term.to_string()))
    }

    async fn list(&self, kind: TermKind) -> DomainResult<Vec<String>> {
        let mut terms: Vec<String> = self.lock()?.set(kind).iter().cloned().collect();
        terms.sort();
        Ok(terms)
    }
}
