//! Request and result shapes for a preflight run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::payload::PostPayload;
use super::publishing::PublishingState;
use super::terms::TermsResult;

/// Everything the caller knows about the prompt it wants to publish.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreflightRequest {
    /// Explicit title; generated from `mode` and `metadata` when absent or empty.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `template`, `agent` or `blueprint`
    #[serde(default)]
    pub mode: String,
    /// Mode-specific fields (`goal`, `agentName`, `platform`, `mediaStyle`, ...).
    /// Copied into the payload's `meta`.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// Outcome of the validation rules.
///
/// Errors block publishing; warnings are advisory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// What a preflight run hands back to its caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreflightResult {
    pub title: String,
    pub slug: String,
    pub terms_result: TermsResult,
    /// Present only when validation passed.
    pub payload: Option<PostPayload>,
    pub state: PublishingState,
    pub validation: ValidationReport,
}
