//! Facade-to-engine level translation.

use super::{EngineLevel, LogLevel};

/// Fixed total mapping from facade severities to engine severities.
#[must_use]
pub const fn map_level(level: LogLevel) -> EngineLevel {
    match level {
        LogLevel::Trace => EngineLevel::Trace,
        LogLevel::Debug => EngineLevel::Debug,
        LogLevel::Information => EngineLevel::Info,
        LogLevel::Warning => EngineLevel::Warn,
        LogLevel::Error => EngineLevel::Error,
        LogLevel::Critical => EngineLevel::Fatal,
        LogLevel::None => EngineLevel::Off,
    }
}

/// Maps a raw facade level value. Values outside the known range land on
/// `Debug` rather than failing.
#[must_use]
pub const fn map_raw_level(raw: i32) -> EngineLevel {
    match LogLevel::from_raw(raw) {
        Some(level) => map_level(level),
        None => EngineLevel::Debug,
    }
}
