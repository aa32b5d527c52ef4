//! In-memory engine that keeps every event it is given.

use super::{Engine, EngineEvent};
use crate::level::EngineLevel;
use crate::logger::EventId;
use std::sync::{Mutex, PoisonError};

/// Owned copy of an [`EngineEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub level: EngineLevel,
    pub name: String,
    pub event_id: EventId,
    /// The error's `Display` output, if one was attached.
    pub error: Option<String>,
    pub message: String,
}

/// Records events instead of writing them anywhere.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    events: Mutex<Vec<RecordedEvent>>,
}

impl MemoryEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.lock().clone()
    }

    /// Just the messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.message.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RecordedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Engine for MemoryEngine {
    fn write(&self, event: &EngineEvent<'_>) -> Result<(), crate::Error> {
        self.lock().push(RecordedEvent {
            level: event.level,
            name: event.name.to_string(),
            event_id: event.event_id,
            error: event.error.map(ToString::to_string),
            message: event.message.to_string(),
        });
        Ok(())
    }
}
