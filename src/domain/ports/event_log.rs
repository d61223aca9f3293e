use async_trait::async_trait;
use serde_json::Value;
use std::time::Instant;

use crate::domain::models::EventLevel;

/// Port trait for the publishing event journal.
///
/// Events describe what the preflight did (`term_created`,
/// `slug_collision`, `preflight_complete`, ...) with a structured `data`
/// payload. Recording is fire-and-forget: implementations must not fail the
/// caller, and report their own write errors through `tracing` instead.
///
/// # Examples
///
/// ```
/// use promptinator::domain::models::EventLevel;
/// use promptinator::domain::ports::EventLog;
/// use serde_json::json;
///
/// async fn example(log: &dyn EventLog) {
///     log.record("term_created", json!({"type": "tag", "value": "api"}), EventLevel::Info)
///         .await;
///     log.info("draft_created", json!({"slug": "api-docs"})).await;
/// }
/// ```
#[async_trait]
pub trait EventLog: Send + Sync {
    /// Record `event` with structured `data` at `level`.
    async fn record(&self, event: &str, data: Value, level: EventLevel);

    /// Record an info-level event.
    async fn info(&self, event: &str, data: Value) {
        self.record(event, data, EventLevel::Info).await;
    }

    /// Record a debug-level event.
    async fn debug(&self, event: &str, data: Value) {
        self.record(event, data, EventLevel::Debug).await;
    }
}

/// Record how long `operation` took as a `performance_{operation}` debug
/// event. Fields of `extra` (when it is an object) are merged into the data.
pub async fn record_performance(log: &dyn EventLog, operation: &str, started: Instant, extra: Value) {
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let mut data = serde_json::Map::new();
    data.insert("duration_ms".to_string(), Value::from(duration_ms));
    if let Value::Object(fields) = extra {
        data.extend(fields);
    }

    log.debug(&format!("performance_{operation}"), Value::Object(data))
        .await;
}
