//! Everything that decides whether an event goes through, in one immutable value.
//!
//! Built once at startup and shared as `Arc<Settings>` by every adapter; nothing in
//! this crate mutates it afterwards.

use crate::filter::LevelPredicate;
use crate::level::LogLevel;
use std::fmt;
use std::sync::Arc;

/// Acceptance, aliasing and threshold configuration shared by all adapters of a provider.
#[derive(Clone, Default)]
pub struct Settings {
    /// Empty accepts every category. Otherwise a category must match one pattern.
    pub accepted_category_names: Vec<String>,
    /// Ordered `(pattern, routing name)` pairs. Keys compare case-insensitively.
    pub aliases: Vec<(String, String)>,
    /// Events strictly below this level are dropped. `None` means no floor.
    pub min_level: Option<LogLevel>,
    /// Consulted only after `min_level` lets the event through. Its answer is final.
    pub filter: Option<Arc<dyn LevelPredicate>>,
    /// Prefix messages with the active scope stack.
    pub include_scopes: bool,
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one accepted category pattern.
    #[must_use]
    pub fn accept(mut self, pattern: impl Into<String>) -> Self {
        self.accepted_category_names.push(pattern.into());
        self
    }

    /// Adds an alias. A pattern equal to an existing one ignoring case replaces
    /// that entry in place, so the table behaves like a case-insensitive map.
    #[must_use]
    pub fn alias(mut self, pattern: impl Into<String>, routing_name: impl Into<String>) -> Self {
        self.insert_alias(pattern.into(), routing_name.into());
        self
    }

    #[must_use]
    pub const fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Installs a closure as the custom predicate.
    #[must_use]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&str, LogLevel) -> bool + Send + Sync + 'static,
    {
        self.predicate(predicate)
    }

    /// Installs any [`LevelPredicate`] implementation as the custom predicate.
    #[must_use]
    pub fn predicate(mut self, predicate: impl LevelPredicate + 'static) -> Self {
        self.filter = Some(Arc::new(predicate));
        self
    }

    #[must_use]
    pub const fn include_scopes(mut self, enabled: bool) -> Self {
        self.include_scopes = enabled;
        self
    }

    /// Case-insensitive upsert into the alias table.
    pub fn insert_alias(&mut self, pattern: String, routing_name: String) {
        if let Some(entry) = self
            .aliases
            .iter_mut()
            .find(|(existing, _)| existing.to_lowercase() == pattern.to_lowercase())
        {
            entry.1 = routing_name;
        } else {
            self.aliases.push((pattern, routing_name));
        }
    }

    /// Case-insensitive alias lookup by exact pattern key, no wildcard expansion.
    #[must_use]
    pub fn alias_for(&self, pattern: &str) -> Option<&str> {
        let key = pattern.to_lowercase();
        self.aliases
            .iter()
            .find(|(existing, _)| existing.to_lowercase() == key)
            .map(|(_, alias)| alias.as_str())
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("accepted_category_names", &self.accepted_category_names)
            .field("aliases", &self.aliases)
            .field("min_level", &self.min_level)
            .field("filter", &self.filter.as_ref().map(|_| "<predicate>"))
            .field("include_scopes", &self.include_scopes)
            .finish()
    }
}
