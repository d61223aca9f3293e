//! Publish payload types.

use serde::Serialize;
use serde_json::{Map, Value};

/// Version stamped into every payload's `meta`.
pub const PAYLOAD_VERSION: &str = "1.0.0";

/// Minimum number of categories a payload must carry.
pub const MIN_CATEGORIES: usize = 1;

/// Minimum number of tags a payload must carry.
pub const MIN_TAGS: usize = 3;

/// Raw material for a payload, before validation and normalization.
#[derive(Debug, Clone, Default)]
pub struct PayloadInput {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub meta: Map<String, Value>,
}

/// A normalized, publish-ready bundle.
///
/// Only the payload builder can create one, so every value has at least
/// [`MIN_CATEGORIES`] categories and [`MIN_TAGS`] tags, and `meta` carrying
/// `created_at` and `version`. Title, slug and content were non-empty before
/// trimming; whitespace-only input trims down to an empty field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostPayload {
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) content: String,
    pub(crate) categories: Vec<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) meta: Map<String, Value>,
}

impl PostPayload {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }
}
