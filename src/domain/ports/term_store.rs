use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::TermKind;

/// The set of categories and tags already known to the site.
///
/// Terms are stored in normalized form. Categories and tags are independent
/// namespaces: the same string may exist as a tag but not as a category.
#[async_trait]
pub trait TermStore: Send + Sync {
    /// Add `term` under `kind`.
    ///
    /// Returns `true` if the term was newly added and `false` if it was
    /// already present. The check and the insert happen atomically.
    async fn insert(&self, kind: TermKind, term: &str) -> DomainResult<bool>;

    /// All terms known under `kind`, sorted.
    async fn list(&self, kind: TermKind) -> DomainResult<Vec<String>>;
}
