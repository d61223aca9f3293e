use chrono::Utc;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::{Arc, LazyLock};
use tracing::{debug, instrument, warn};

use crate::domain::errors::DomainResult;
use crate::domain::ports::{EventLog, SlugRegistry};

/// Longest base slug kept before suffixes are appended.
pub const MAX_SLUG_LENGTH: usize = 50;

/// Random-suffix attempts before falling back to a timestamp.
pub const MAX_SLUG_ATTEMPTS: usize = 10;

const MAX_SUFFIX_LENGTH: usize = 8;
const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("static regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));
static HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("static regex"));

/// Turn a title into a slug candidate: lowercase, drop anything outside
/// `[a-z0-9]`, whitespace and `-`, then hyphenate and collapse.
pub fn slugify_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");
    HYPHENS.replace_all(&hyphenated, "-").trim().to_string()
}

/// Normalize an arbitrary base into a slug of at most [`MAX_SLUG_LENGTH`]
/// characters matching `[a-z0-9-]*` with no repeated, leading or trailing
/// hyphens (truncation may leave a trailing one).
pub fn normalize_slug(base: &str) -> String {
    let lowered = base.to_lowercase();
    let stripped = DISALLOWED.replace_all(lowered.trim(), "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");
    let collapsed = HYPHENS.replace_all(&hyphenated, "-");

    collapsed
        .trim_matches('-')
        .chars()
        .take(MAX_SLUG_LENGTH)
        .collect()
}

fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from(SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())]))
        .collect()
}

/// Allocates slugs that the registry does not already know about.
#[derive(Clone)]
pub struct SlugAllocator {
    events: Arc<dyn EventLog>,
}

impl SlugAllocator {
    pub fn new(events: Arc<dyn EventLog>) -> Self {
        Self { events }
    }

    /// Normalize `base` and make it unique against `registry`.
    ///
    /// On collision, up to [`MAX_SLUG_ATTEMPTS`] random suffixes of growing
    /// length are tried. If all of them collide the current Unix time in
    /// milliseconds is appended instead, without checking again. An empty
    /// normalized base is treated like any other candidate.
    ///
    /// Registry errors are returned as-is.
    #[instrument(skip(self, registry))]
    pub async fn unique_slug(&self, base: &str, registry: &dyn SlugRegistry) -> DomainResult<String> {
        let slug = normalize_slug(base);

        if !registry.exists(&slug).await? {
            return Ok(slug);
        }

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let candidate = format!(
                "{slug}-{}",
                random_suffix((attempt * 2).min(MAX_SUFFIX_LENGTH))
            );
            let taken = registry.exists(&candidate).await?;

            debug!(attempt, candidate = %candidate, taken, "slug collision retry");
            self.events
                .info(
                    "slug_collision",
                    json!({
                        "original": base,
                        "attempt": attempt,
                        "candidate": candidate,
                        "success": !taken,
                    }),
                )
                .await;

            if !taken {
                return Ok(candidate);
            }
        }

        let fallback = format!("{slug}-{}", Utc::now().timestamp_millis());
        warn!(base = %base, fallback = %fallback, "slug attempts exhausted, using timestamp");
        Ok(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::ports::NullEventLog;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Reports a collision for the first `collisions` lookups.
    struct CollidingRegistry {
        collisions: usize,
        calls: AtomicUsize,
        seen: Mutex<Vec<String>>,
    }

    impl CollidingRegistry {
        fn new(collisions: usize) -> Self {
            Self {
                collisions,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SlugRegistry for CollidingRegistry {
        async fn exists(&self, slug: &str) -> DomainResult<bool> {
            self.seen.lock().unwrap().push(slug.to_string());
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(call <= self.collisions)
        }
    }

    struct FailingRegistry;

    #[async_trait]
    impl SlugRegistry for FailingRegistry {
        async fn exists(&self, slug: &str) -> DomainResult<bool> {
            Err(DomainError::SlugLookupFailed {
                slug: slug.to_string(),
                reason: "connection refused".to_string(),
            })
        }
    }

    fn allocator() -> SlugAllocator {
        SlugAllocator::new(Arc::new(NullEventLog))
    }

    fn is_clean_slug(slug: &str) -> bool {
        slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !slug.contains("--")
    }

    #[tokio::test]
    async fn test_returns_base_when_free() {
        let registry = CollidingRegistry::new(0);
        let slug = allocator().unique_slug("my-awesome-title", &registry).await.unwrap();

        assert_eq!(slug, "my-awesome-title");
        assert_eq!(registry.calls(), 1);
        assert_eq!(registry.seen.lock().unwrap()[0], "my-awesome-title");
    }

    #[tokio::test]
    async fn test_normalizes_punctuation_and_case() {
        let registry = CollidingRegistry::new(0);
        let slug = allocator()
            .unique_slug("  My AWESOME Title!!!  ", &registry)
            .await
            .unwrap();
        assert_eq!(slug, "my-awesome-title");

        let slug = allocator()
            .unique_slug("Title with $pecial Ch@rs & Spaces", &registry)
            .await
            .unwrap();
        assert_eq!(slug, "title-with-pecial-chrs-spaces");
        assert!(is_clean_slug(&slug));
    }

    #[tokio::test]
    async fn test_limits_length() {
        let registry = CollidingRegistry::new(0);
        let slug = allocator()
            .unique_slug(
                "this-is-an-extremely-long-title-that-definitely-exceeds-fifty-characters-limit",
                &registry,
            )
            .await
            .unwrap();
        assert_eq!(slug.len(), MAX_SLUG_LENGTH);
    }

    #[tokio::test]
    async fn test_three_collisions_then_suffix() {
        let registry = CollidingRegistry::new(3);
        let slug = allocator().unique_slug("popular-title", &registry).await.unwrap();

        assert_ne!(slug, "popular-title");
        assert_eq!(registry.calls(), 4);

        let suffix = slug.strip_prefix("popular-title-").unwrap();
        // third retry uses a six character suffix
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

        let seen = registry.seen.lock().unwrap();
        assert_eq!(seen[1].len(), "popular-title-".len() + 2);
        assert_eq!(seen[2].len(), "popular-title-".len() + 4);
        assert_eq!(seen[3], slug);
    }

    #[tokio::test]
    async fn test_timestamp_fallback_when_exhausted() {
        let registry = CollidingRegistry::new(usize::MAX);

        let before = Utc::now().timestamp_millis();
        let slug = allocator().unique_slug("always-colliding", &registry).await.unwrap();
        let after = Utc::now().timestamp_millis();

        assert_eq!(registry.calls(), 1 + MAX_SLUG_ATTEMPTS);
        let millis: i64 = slug
            .strip_prefix("always-colliding-")
            .unwrap()
            .parse()
            .unwrap();
        assert!(millis >= before && millis <= after);

        // suffix length caps at eight
        let seen = registry.seen.lock().unwrap();
        assert_eq!(seen[10].len(), "always-colliding-".len() + MAX_SUFFIX_LENGTH);
    }

    #[tokio::test]
    async fn test_empty_base_is_a_candidate() {
        let registry = CollidingRegistry::new(0);
        let slug = allocator().unique_slug("!!!", &registry).await.unwrap();
        assert_eq!(slug, "");
        assert_eq!(registry.calls(), 1);
    }

    #[tokio::test]
    async fn test_registry_errors_propagate() {
        let err = allocator()
            .unique_slug("anything", &FailingRegistry)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlugLookupFailed { .. }));
    }

    #[test]
    fn test_slugify_title() {
        assert_eq!(
            slugify_title("API Documentation Prompt Template"),
            "api-documentation-prompt-template"
        );
        assert_eq!(slugify_title("Dr. Data - AI Assistant"), "dr-data-ai-assistant");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalized_slugs_are_clean(base in ".{0,120}") {
                let slug = normalize_slug(&base);
                prop_assert!(slug.chars().count() <= MAX_SLUG_LENGTH);
                prop_assert!(is_clean_slug(&slug));
                prop_assert!(!slug.starts_with('-'));
            }

            #[test]
            fn normalizing_twice_changes_nothing(base in "[a-zA-Z0-9 !@#-]{0,40}") {
                let once = normalize_slug(&base);
                prop_assert_eq!(normalize_slug(&once), once.clone());
            }
        }
    }
}
