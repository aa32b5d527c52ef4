//! The per-category entry point. An adapter decides, renders, and hands off;
//! the provider creates and caches one adapter per category name.

pub mod buffer;
mod provider;

pub use provider::{LoggerProvider, ProviderBuilder};

use crate::category;
use crate::engine::{Engine, EngineEvent};
use crate::filter;
use crate::level::{LogLevel, map_level};
use crate::scope::{self, ScopeGuard, ScopeProvider};
use crate::settings::Settings;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Formatter signature as a plain function pointer, handy for spelling out `None`.
pub type FormatterFn<S> = fn(&S, Option<&(dyn StdError + 'static)>) -> String;

/// Identifies a kind of event. Passed through to the engine, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EventId {
    pub id: i32,
    pub name: Option<&'static str>,
}

impl EventId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    #[must_use]
    pub const fn named(id: i32, name: &'static str) -> Self {
        Self {
            id,
            name: Some(name),
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{}:{name}", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Logger for one category.
///
/// Acceptance and the routing name depend only on the category and the settings,
/// both fixed for the adapter's lifetime, so they are resolved once here.
pub struct LoggerAdapter {
    category: String,
    routing_name: String,
    accepted: bool,
    settings: Arc<Settings>,
    scopes: Arc<dyn ScopeProvider>,
    engine: Arc<dyn Engine>,
}

impl LoggerAdapter {
    pub fn new(
        category: impl Into<String>,
        settings: Arc<Settings>,
        scopes: Arc<dyn ScopeProvider>,
        engine: Arc<dyn Engine>,
    ) -> Self {
        let category = category.into();
        let accepted = category::is_accepted(&category, &settings.accepted_category_names);
        let routing_name = category::resolve_alias(&category, &settings.aliases).to_string();

        Self {
            category,
            routing_name,
            accepted,
            settings,
            scopes,
            engine,
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The name the engine receives: an alias if one matched, else the category.
    #[must_use]
    pub fn routing_name(&self) -> &str {
        &self.routing_name
    }

    /// Whether the category passed the accept-list.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.accepted
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The engine this adapter writes to.
    #[must_use]
    pub fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }

    /// Whether an event at `level` would reach the engine.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        if level == LogLevel::None {
            return false;
        }
        self.accepted && filter::is_enabled(level, &self.category, &self.settings)
    }

    /// Pushes `state` onto the scope stack until the returned guard is dropped.
    pub fn begin_scope<T>(&self, state: T) -> ScopeGuard
    where
        T: fmt::Display + 'static,
    {
        self.scopes.push(Box::new(state))
    }

    /// Filters, formats, prefixes scopes, and writes one event.
    ///
    /// A disabled event returns `Ok(())` without calling `formatter`.
    ///
    /// # Errors
    /// [`crate::Error::MissingFormatter`] when an enabled event has no formatter,
    /// otherwise whatever the engine's write returns.
    pub fn log<S, F>(
        &self,
        level: LogLevel,
        event_id: EventId,
        state: &S,
        error: Option<&(dyn StdError + 'static)>,
        formatter: Option<F>,
    ) -> Result<(), crate::Error>
    where
        S: ?Sized,
        F: FnOnce(&S, Option<&(dyn StdError + 'static)>) -> String,
    {
        let engine_level = map_level(level);
        if !self.is_enabled(level) {
            return Ok(());
        }

        let Some(formatter) = formatter else {
            return Err(crate::Error::MissingFormatter);
        };

        let mut buf = buffer::acquire();
        let text = formatter(state, error);

        let scoped =
            self.settings.include_scopes && scope::render(self.scopes.as_ref(), &mut buf) > 0;
        let message = if scoped {
            buf.push_str(&text);
            buf.as_str()
        } else {
            text.as_str()
        };

        let result = self.engine.write(&EngineEvent {
            level: engine_level,
            name: &self.routing_name,
            event_id,
            error,
            message,
        });

        buffer::release(buf);
        result
    }

    /// Logs a ready-made message at `level`.
    ///
    /// # Errors
    /// Whatever the engine's write returns.
    pub fn log_message(&self, level: LogLevel, msg: &str) -> Result<(), crate::Error> {
        self.log(level, EventId::default(), msg, None, Some(format_message))
    }

    /// # Errors
    /// Whatever the engine's write returns.
    pub fn trace(&self, msg: &str) -> Result<(), crate::Error> {
        self.log_message(LogLevel::Trace, msg)
    }

    /// # Errors
    /// Whatever the engine's write returns.
    pub fn debug(&self, msg: &str) -> Result<(), crate::Error> {
        self.log_message(LogLevel::Debug, msg)
    }

    /// # Errors
    /// Whatever the engine's write returns.
    pub fn info(&self, msg: &str) -> Result<(), crate::Error> {
        self.log_message(LogLevel::Information, msg)
    }

    /// # Errors
    /// Whatever the engine's write returns.
    pub fn warn(&self, msg: &str) -> Result<(), crate::Error> {
        self.log_message(LogLevel::Warning, msg)
    }

    /// # Errors
    /// Whatever the engine's write returns.
    pub fn error(&self, msg: &str) -> Result<(), crate::Error> {
        self.log_message(LogLevel::Error, msg)
    }

    /// # Errors
    /// Whatever the engine's write returns.
    pub fn critical(&self, msg: &str) -> Result<(), crate::Error> {
        self.log_message(LogLevel::Critical, msg)
    }
}

fn format_message(msg: &str, _: Option<&(dyn StdError + 'static)>) -> String {
    msg.to_string()
}

impl fmt::Debug for LoggerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerAdapter")
            .field("category", &self.category)
            .field("routing_name", &self.routing_name)
            .field("accepted", &self.accepted)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
