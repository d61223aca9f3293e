//! Logging infrastructure
//!
//! Structured diagnostics using tracing and tracing-subscriber:
//! - JSON or pretty console output
//! - Optional rolling log files
//!
//! The publishing event journal lives in `infrastructure::event_log`; this
//! module only concerns the process's own diagnostics.

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
