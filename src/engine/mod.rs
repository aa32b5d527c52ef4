//! The outbound side: the one call the bridge makes into the logging engine.
//!
//! Formatting, routing and I/O belong to the engine. The two engines shipped here
//! are small: [`MemoryEngine`] records events for inspection and
//! [`StreamEngine`] prints one line per event.

mod memory;
mod stream;

pub use memory::{MemoryEngine, RecordedEvent};
pub use stream::{StreamEngine, StreamTarget};

use crate::level::EngineLevel;
use crate::logger::EventId;

/// Everything the engine receives for one accepted event.
#[derive(Debug, Clone, Copy)]
pub struct EngineEvent<'a> {
    /// Already translated to the engine's scale.
    pub level: EngineLevel,
    /// Routing name: the category, or its alias.
    pub name: &'a str,
    pub event_id: EventId,
    /// Passed through untouched.
    pub error: Option<&'a (dyn std::error::Error + 'static)>,
    /// Formatted message, scope prefix included when scopes are enabled.
    pub message: &'a str,
}

/// `Send + Sync` bounds let every adapter on every thread share one engine without locks
/// on the trait object.
pub trait Engine: Send + Sync {
    /// Hands one event to the engine.
    ///
    /// # Errors
    /// Whatever the engine reports. The bridge propagates it to the caller of `log` unchanged.
    fn write(&self, event: &EngineEvent<'_>) -> Result<(), crate::Error>;

    /// Buffered engines may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
