//! Publishing event journal adapters
//!
//! - `FileEventLog`: daily JSON-lines files, mirrored to tracing
//! - `TracingEventLog`: tracing only, for when the journal is disabled

pub mod file_event_log;
pub mod tracing_event_log;

pub use file_event_log::{EventLogStats, FileEventLog};
pub use tracing_event_log::TracingEventLog;
