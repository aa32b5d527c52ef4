//! The level gate: disabled sentinel, minimum level, then the custom predicate.

use crate::level::LogLevel;
use crate::settings::Settings;

/// Caller-supplied accept/reject decision over `(category, level)`.
///
/// `Send + Sync` because one predicate is shared by every adapter on every thread.
pub trait LevelPredicate: Send + Sync {
    fn accepts(&self, category: &str, level: LogLevel) -> bool;
}

impl<F> LevelPredicate for F
where
    F: Fn(&str, LogLevel) -> bool + Send + Sync,
{
    fn accepts(&self, category: &str, level: LogLevel) -> bool {
        self(category, level)
    }
}

/// Decides whether an event at `level` from `category` passes the level rules.
///
/// Does not look at category acceptance; the adapter combines the two.
#[must_use]
pub fn is_enabled(level: LogLevel, category: &str, settings: &Settings) -> bool {
    if level == LogLevel::None {
        return false;
    }

    if let Some(min) = settings.min_level {
        if level < min {
            return false;
        }
    }

    settings
        .filter
        .as_ref()
        .is_none_or(|predicate| predicate.accepts(category, level))
}
