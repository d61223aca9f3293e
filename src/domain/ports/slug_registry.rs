use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Answers whether a slug is already taken by published content.
///
/// Lookups may hit external storage, so they are async and fallible. A
/// failed lookup aborts the preflight that asked for it.
#[async_trait]
pub trait SlugRegistry: Send + Sync {
    /// Returns `Ok(true)` if `slug` is already in use.
    async fn exists(&self, slug: &str) -> DomainResult<bool>;

    /// Record that `slug` has been handed out.
    ///
    /// Registries backed by real content learn about slugs when that content
    /// is stored, so the default does nothing.
    async fn reserve(&self, _slug: &str) -> DomainResult<()> {
        Ok(())
    }
}
