use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use super::term_reconciler::normalize_term;
use crate::domain::errors::PayloadError;
use crate::domain::models::{PayloadInput, PostPayload, MIN_CATEGORIES, MIN_TAGS, PAYLOAD_VERSION};

/// Validate `input` and assemble a publish payload.
///
/// Rules are checked in order and the first failure is returned:
/// 1. title, slug and content must be non-empty,
/// 2. at least [`MIN_CATEGORIES`] category,
/// 3. at least [`MIN_TAGS`] tags.
///
/// Text fields are trimmed, categories lowercased and trimmed, tags
/// normalized like terms. `meta` keeps the caller's keys, with `created_at`
/// and `version` always overwritten.
pub fn build_payload(input: PayloadInput) -> Result<PostPayload, PayloadError> {
    let PayloadInput {
        title,
        slug,
        content,
        categories,
        tags,
        mut meta,
    } = input;

    if title.is_empty() || slug.is_empty() || content.is_empty() {
        return Err(PayloadError::MissingRequiredFields);
    }

    if categories.len() < MIN_CATEGORIES {
        return Err(PayloadError::NoCategories);
    }

    if tags.len() < MIN_TAGS {
        return Err(PayloadError::TooFewTags {
            required: MIN_TAGS,
            actual: tags.len(),
        });
    }

    meta.insert(
        "created_at".to_string(),
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    meta.insert("version".to_string(), Value::String(PAYLOAD_VERSION.to_string()));

    Ok(PostPayload {
        title: title.trim().to_string(),
        slug: slug.trim().to_string(),
        content: content.trim().to_string(),
        categories: categories
            .iter()
            .map(|c| c.to_lowercase().trim().to_string())
            .collect(),
        tags: tags.iter().map(|t| normalize_term(t)).collect(),
        meta,
    })
}
