//! Null slug registry implementation.
//!
//! Used when no published content is available to check against.

use async_trait::async_trait;

use super::SlugRegistry;
use crate::domain::errors::DomainResult;

/// A registry that reports every slug as free.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSlugRegistry;

impl NullSlugRegistry {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SlugRegistry for NullSlugRegistry {
    async fn exists(&self, _slug: &str) -> DomainResult<bool> {
        Ok(false)
    }
}
