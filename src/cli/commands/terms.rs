//! Implementation of the `promptinator terms` command.

use anyhow::Result;
use serde::Serialize;

use crate::adapters::memory::InMemoryTermStore;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, TermKind};
use crate::domain::ports::TermStore;

/// Terms the preflight treats as existing.
#[derive(Debug, Serialize)]
pub struct TermsOutput {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl CommandOutput for TermsOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("Categories ({}):", self.categories.len())];
        lines.extend(self.categories.iter().map(|c| format!("  {c}")));
        lines.push(String::new());
        lines.push(format!("Tags ({}):", self.tags.len()));
        lines.extend(self.tags.iter().map(|t| format!("  {t}")));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Collect every known term from `store`, sorted per kind.
pub async fn known_terms(store: &dyn TermStore) -> Result<TermsOutput> {
    Ok(TermsOutput {
        categories: store.list(TermKind::Category).await?,
        tags: store.list(TermKind::Tag).await?,
    })
}

pub async fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let store = InMemoryTermStore::from_config(&config.terms);
    output(&known_terms(&store).await?, json_mode);
    Ok(())
}
