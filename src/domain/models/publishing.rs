//! Publishing state machine.
//!
//! Tracks one publish attempt through its lifecycle:
//!
//! ```text
//! Draft → Preflight → ReadyToPublish → Published → Draft
//!             ↘            ↘
//!              Failed ←────┘
//!              ↳ Draft | Preflight
//! ```
//!
//! Each request owns its own machine; nothing is shared or persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};

/// Lifecycle state of a publish attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublishingState {
    #[default]
    Draft,
    Preflight,
    ReadyToPublish,
    Published,
    Failed,
}

impl PublishingState {
    /// Every state, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Preflight,
        Self::ReadyToPublish,
        Self::Published,
        Self::Failed,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Preflight => "PREFLIGHT",
            Self::ReadyToPublish => "READY_TO_PUBLISH",
            Self::Published => "PUBLISHED",
            Self::Failed => "FAILED",
        }
    }

    /// States reachable in one step from this one.
    ///
    /// This is the single transition table; it is fixed.
    pub const fn allowed_transitions(&self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Preflight],
            Self::Preflight => &[Self::ReadyToPublish, Self::Failed],
            Self::ReadyToPublish => &[Self::Published, Self::Failed],
            Self::Published => &[Self::Draft],
            Self::Failed => &[Self::Draft, Self::Preflight],
        }
    }

    pub fn can_transition_to(&self, next: Self) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

impl fmt::Display for PublishingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An accepted transition. Never modified after it is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    pub from: PublishingState,
    pub to: PublishingState,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

/// State machine for a single publish attempt.
#[derive(Debug, Clone, Default)]
pub struct PublishingStateMachine {
    state: PublishingState,
    history: Vec<StateTransition>,
    metadata: HashMap<String, Value>,
}

impl PublishingStateMachine {
    /// Create a machine in the `Draft` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a machine that starts in `initial` with an empty history.
    pub fn with_state(initial: PublishingState) -> Self {
        Self {
            state: initial,
            ..Self::default()
        }
    }

    pub const fn state(&self) -> PublishingState {
        self.state
    }

    /// Copy of the transition history, oldest first.
    pub fn history(&self) -> Vec<StateTransition> {
        self.history.clone()
    }

    /// Copy of the accumulated metadata.
    pub fn metadata(&self) -> HashMap<String, Value> {
        self.metadata.clone()
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.metadata.insert(key.into(), value);
    }

    pub fn can_transition(&self, to: PublishingState) -> bool {
        self.state.can_transition_to(to)
    }

    /// Move to `to` if the table allows it.
    ///
    /// Returns `false` and changes nothing when the transition is illegal.
    pub fn transition(&mut self, to: PublishingState) -> bool {
        self.transition_with(to, HashMap::new())
    }

    /// Like [`transition`](Self::transition), merging `metadata` into the
    /// machine's metadata on success.
    pub fn transition_with(&mut self, to: PublishingState, metadata: HashMap<String, Value>) -> bool {
        if !self.can_transition(to) {
            return false;
        }

        self.history.push(StateTransition {
            from: self.state,
            to,
            timestamp: Utc::now(),
            metadata: metadata.clone(),
        });
        self.state = to;
        self.metadata.extend(metadata);

        true
    }

    /// Fallible form of [`transition_with`](Self::transition_with).
    pub fn try_transition(
        &mut self,
        to: PublishingState,
        metadata: HashMap<String, Value>,
    ) -> DomainResult<()> {
        let from = self.state;
        if self.transition_with(to, metadata) {
            Ok(())
        } else {
            Err(DomainError::InvalidStateTransition { from, to })
        }
    }

    /// Return to `Draft`, clearing history and metadata.
    pub fn reset(&mut self) {
        self.state = PublishingState::Draft;
        self.history.clear();
        self.metadata.clear();
    }
}
