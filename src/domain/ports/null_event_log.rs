//! Null event log implementation.
//!
//! Used when the event journal is disabled but the services still need an
//! EventLog to talk to.

use async_trait::async_trait;
use serde_json::Value;

use super::EventLog;
use crate::domain::models::EventLevel;

/// An event log that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventLog;

impl NullEventLog {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventLog for NullEventLog {
    async fn record(&self, _event: &str, _data: Value, _level: EventLevel) {}
}
