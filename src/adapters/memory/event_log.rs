//! In-memory event log.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use crate::domain::models::{EventEntry, EventLevel};
use crate::domain::ports::EventLog;

/// Keeps every recorded event in memory, in recording order.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    entries: Mutex<Vec<EventEntry>>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<EventEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Entries whose event name equals `event`.
    pub fn named(&self, event: &str) -> Vec<EventEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.event == event)
            .collect()
    }
}

#[async_trait]
impl EventLog for InMemoryEventLog {
    async fn record(&self, event: &str, data: Value, level: EventLevel) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(EventEntry::now(event, data, level)),
            Err(e) => tracing::warn!(event, error = %e, "event log mutex poisoned, dropping event"),
        }
    }
}
