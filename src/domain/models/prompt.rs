//! Stored prompts produced by the draft and publish steps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::payload::PostPayload;
use super::publishing::PublishingState;

/// Whether a stored prompt is a draft or live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStatus {
    Draft,
    Published,
}

/// A prompt as handed to the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: Uuid,
    pub mode: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub meta: Map<String, Value>,
    pub status: PromptStatus,
    pub created_at: DateTime<Utc>,
}

impl PromptRecord {
    /// Snapshot a payload. The mode is read from `meta.mode`, defaulting to
    /// `template`.
    pub fn from_payload(payload: &PostPayload, status: PromptStatus) -> Self {
        let mode = payload
            .meta()
            .get("mode")
            .and_then(Value::as_str)
            .unwrap_or("template")
            .to_string();

        Self {
            id: Uuid::new_v4(),
            mode,
            title: payload.title().to_string(),
            slug: payload.slug().to_string(),
            content: payload.content().to_string(),
            categories: payload.categories().to_vec(),
            tags: payload.tags().to_vec(),
            meta: payload.meta().clone(),
            status,
            created_at: Utc::now(),
        }
    }
}

/// Returned by the draft step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftReceipt {
    pub draft_id: Uuid,
}

/// Returned by the publish step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReceipt {
    pub published_id: Uuid,
    pub url: String,
    pub state: PublishingState,
}
