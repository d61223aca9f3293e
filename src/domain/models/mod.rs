//! Domain models for the publishing preflight.

pub mod config;
pub mod event;
pub mod payload;
pub mod preflight;
pub mod prompt;
pub mod publishing;
pub mod terms;
pub mod title;

pub use config::{Config, EventLogConfig, LoggingConfig, SlugRegistryKind, TermsConfig};
pub use event::{EventEntry, EventLevel};
pub use payload::{PayloadInput, PostPayload, MIN_CATEGORIES, MIN_TAGS, PAYLOAD_VERSION};
pub use preflight::{PreflightRequest, PreflightResult, ValidationReport};
pub use prompt::{DraftReceipt, PromptRecord, PromptStatus, PublishReceipt};
pub use publishing::{PublishingState, PublishingStateMachine, StateTransition};
pub use terms::{TermKind, TermsInput, TermsResult};
pub use title::TitleInput;
