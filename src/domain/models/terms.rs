//! Taxonomy terms attached to a published prompt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which taxonomy a term belongs to. Each kind is its own namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    Category,
    Tag,
}

impl TermKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proposed terms, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsInput {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Normalized terms split by whether they were already known.
///
/// Categories come first, then tags, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsResult {
    pub created: Vec<String>,
    pub existing: Vec<String>,
}

impl TermsResult {
    pub fn total(&self) -> usize {
        self.created.len() + self.existing.len()
    }
}
