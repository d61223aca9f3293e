//! Publishing services: the preflight pipeline and the steps that follow it.

pub mod payload_builder;
pub mod preflight_service;
pub mod publish_service;
pub mod slug_allocator;
pub mod term_reconciler;
pub mod title_generator;

pub use payload_builder::build_payload;
pub use preflight_service::{validate_request, PreflightService};
pub use publish_service::PublishService;
pub use slug_allocator::{normalize_slug, slugify_title, SlugAllocator};
pub use term_reconciler::{normalize_term, TermReconciler};
pub use title_generator::{capitalize_words, generate_title};
