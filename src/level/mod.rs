//! Severity levels on both sides of the bridge.
//!
//! [`LogLevel`] is what application code logs with; [`EngineLevel`] is what the
//! engine understands. [`map_level`] is the only way across.

mod engine;
mod map;

pub use engine::EngineLevel;
pub use map::{map_level, map_raw_level};

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the filter can compare an event's level against the configured minimum.
///
/// `None` sorts above every real level; it is never enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// Most detailed messages, may contain sensitive application data.
    Trace = 0,
    /// Interactive investigation during development.
    Debug = 1,
    /// General flow of the application.
    #[default]
    Information = 2,
    /// Abnormal or unexpected events that do not stop execution.
    Warning = 3,
    /// The current operation failed, the application did not.
    Error = 4,
    /// Unrecoverable application or system crash.
    Critical = 5,
    /// Disabled sentinel. Not a severity anything should be logged at.
    None = 6,
}

impl LogLevel {
    /// Lowercase because config files use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::None => "none",
        }
    }

    /// Inverse of the `as i32` cast, for levels that arrive as wire values.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Information),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            5 => Some(Self::Critical),
            6 => Some(Self::None),
            _ => None,
        }
    }

    /// The six real severities in ascending order, without the `None` sentinel.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Trace,
            Self::Debug,
            Self::Information,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "information" | "info" => Ok(Self::Information),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "critical" | "crit" | "fatal" => Ok(Self::Critical),
            "none" | "off" => Ok(Self::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
