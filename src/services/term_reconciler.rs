use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domain::errors::DomainResult;
use crate::domain::models::{TermKind, TermsInput, TermsResult};
use crate::domain::ports::{EventLog, TermStore};

/// Normalize a free-text term: lowercase, trim, and replace each run of
/// whitespace with a single hyphen.
pub fn normalize_term(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Classifies proposed categories and tags as existing or newly created.
///
/// Unknown terms are added to the store, so every call can permanently teach
/// it new terms.
#[derive(Clone)]
pub struct TermReconciler {
    store: Arc<dyn TermStore>,
    events: Arc<dyn EventLog>,
}

impl TermReconciler {
    pub fn new(store: Arc<dyn TermStore>, events: Arc<dyn EventLog>) -> Self {
        Self { store, events }
    }

    /// Reconcile `input` against the store.
    ///
    /// Terms that normalize to an empty string are dropped. Repeated terms are
    /// processed once per occurrence, so a term passed twice shows up twice.
    #[instrument(skip_all, fields(categories = input.categories.len(), tags = input.tags.len()))]
    pub async fn ensure_terms(&self, input: &TermsInput) -> DomainResult<TermsResult> {
        let mut result = TermsResult::default();

        let batches = [
            (TermKind::Category, &input.categories),
            (TermKind::Tag, &input.tags),
        ];

        for (kind, terms) in batches {
            for raw in terms {
                let term = normalize_term(raw);
                if term.is_empty() {
                    continue;
                }

                if self.store.insert(kind, &term).await? {
                    debug!(kind = %kind, term = %term, "term created");
                    self.events
                        .info("term_created", json!({ "type": kind.as_str(), "value": term }))
                        .await;
                    result.created.push(term);
                } else {
                    result.existing.push(term);
                }
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTermStore;
    use crate::domain::models::TermsConfig;
    use crate::domain::ports::NullEventLog;

    fn reconciler(store: InMemoryTermStore) -> TermReconciler {
        TermReconciler::new(Arc::new(store), Arc::new(NullEventLog))
    }

    fn input(categories: &[&str], tags: &[&str]) -> TermsInput {
        TermsInput {
            categories: categories.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("  Business   Marketing  "), "business-marketing");
        assert_eq!(normalize_term("UNIQUE\tTEST\nTAG"), "unique-test-tag");
        assert_eq!(normalize_term("already-fine"), "already-fine");
        assert_eq!(normalize_term("   "), "");
    }

    #[tokio::test]
    async fn test_existing_and_new_terms() {
        let reconciler = reconciler(InMemoryTermStore::from_config(&TermsConfig::default()));
        let result = reconciler
            .ensure_terms(&input(
                &["business-marketing", "new-category"],
                &["template", "new-tag", "another-new-tag"],
            ))
            .await
            .unwrap();

        assert_eq!(result.existing, vec!["business-marketing", "template"]);
        assert_eq!(result.created, vec!["new-category", "new-tag", "another-new-tag"]);
    }

    #[tokio::test]
    async fn test_normalizes_before_lookup() {
        let reconciler = reconciler(InMemoryTermStore::from_config(&TermsConfig::default()));
        let result = reconciler
            .ensure_terms(&input(
                &["  Business Marketing  "],
                &["Template  ", "  UNIQUE TEST TAG  ", "Another Unique Tag"],
            ))
            .await
            .unwrap();

        assert_eq!(result.existing, vec!["business-marketing", "template"]);
        assert_eq!(result.created, vec!["unique-test-tag", "another-unique-tag"]);
    }

    #[tokio::test]
    async fn test_second_call_sees_everything_as_existing() {
        let reconciler = reconciler(InMemoryTermStore::new());
        let terms = input(&["completely-new-category"], &["tag-1", "tag-2", "tag-3"]);

        let first = reconciler.ensure_terms(&terms).await.unwrap();
        assert_eq!(first.created.len(), 4);
        assert!(first.existing.is_empty());

        let second = reconciler.ensure_terms(&terms).await.unwrap();
        assert!(second.created.is_empty());
        assert_eq!(second.existing.len(), 4);
    }

    #[tokio::test]
    async fn test_empty_terms_dropped_and_duplicates_kept() {
        let reconciler = reconciler(InMemoryTermStore::new());
        let result = reconciler
            .ensure_terms(&input(&["", "   "], &["api", "API", " "]))
            .await
            .unwrap();

        assert_eq!(result.created, vec!["api"]);
        assert_eq!(result.existing, vec!["api"]);
        assert_eq!(result.total(), 2);
    }

    #[tokio::test]
    async fn test_category_and_tag_namespaces() {
        let reconciler = reconciler(InMemoryTermStore::new());
        let result = reconciler
            .ensure_terms(&input(&["coding"], &["coding"]))
            .await
            .unwrap();

        assert_eq!(result.created, vec!["coding", "coding"]);
    }
}
