use async_trait::async_trait;
use serde_json::Value;

use crate::domain::models::EventLevel;
use crate::domain::ports::EventLog;

/// Event log that only emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventLog;

impl TracingEventLog {
    pub const fn new() -> Self {
        Self
    }
}

/// Emit a journal event through `tracing` at the matching level.
pub(crate) fn emit(event: &str, data: &Value, level: EventLevel) {
    match level {
        EventLevel::Debug => tracing::debug!(target: "publishing", event, %data),
        EventLevel::Info => tracing::info!(target: "publishing", event, %data),
        EventLevel::Warn => tracing::warn!(target: "publishing", event, %data),
        EventLevel::Error => tracing::error!(target: "publishing", event, %data),
    }
}

#[async_trait]
impl EventLog for TracingEventLog {
    async fn record(&self, event: &str, data: Value, level: EventLevel) {
        emit(event, &data, level);
    }
}
