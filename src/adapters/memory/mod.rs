//! Process-local adapters backed by mutex-guarded collections.

pub mod event_log;
pub mod prompt_repository;
pub mod slug_registry;
pub mod term_store;

pub use event_log::InMemoryEventLog;
pub use prompt_repository::InMemoryPromptRepository;
pub use slug_registry::InMemorySlugRegistry;
pub use term_store::InMemoryTermStore;
