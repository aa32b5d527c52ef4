//! logbridge's own diagnostics: provider construction, adapter creation, config
//! fallbacks.
//!
//! Routed to an engine installed once with [`init`] or [`init_with_config`]. Uses
//! `OnceLock` so only the first initializer wins; calls made before any
//! initialization are silently dropped.

use crate::config::Config;
use crate::engine::{Engine, EngineEvent, StreamEngine};
use crate::level::{LogLevel, map_level};
use crate::logger::EventId;
use std::sync::{Arc, OnceLock};

/// Routing name every diagnostic is written under.
pub const ROUTING_NAME: &str = "logbridge";

struct Diagnostics {
    engine: Arc<dyn Engine>,
    min_level: LogLevel,
}

static DIAGNOSTICS: OnceLock<Diagnostics> = OnceLock::new();

/// Installs the diagnostic sink. Returns `false` if one was already installed.
pub fn init(engine: Arc<dyn Engine>, min_level: LogLevel) -> bool {
    let installed = DIAGNOSTICS.set(Diagnostics { engine, min_level }).is_ok();
    if installed {
        debug("INTERNAL", &format!("Diagnostics ready, level={min_level}"));
    }
    installed
}

/// Installs a stdio sink when `[diagnostics] enabled = true`; otherwise does nothing.
pub fn init_with_config(config: &Config) -> bool {
    if !config.diagnostics.enabled {
        return false;
    }
    init(Arc::new(StreamEngine::stdio()), config.diagnostics_level())
}

fn log(level: LogLevel, scope: &str, msg: &str) {
    let Some(diagnostics) = DIAGNOSTICS.get() else {
        return;
    };
    if level == LogLevel::None || level < diagnostics.min_level {
        return;
    }

    let message = format!("{scope}: {msg}");
    // A failing diagnostic sink must not break the caller's logging.
    let _ = diagnostics.engine.write(&EngineEvent {
        level: map_level(level),
        name: ROUTING_NAME,
        event_id: EventId::default(),
        error: None,
        message: &message,
    });
}

pub fn trace(scope: &str, msg: &str) {
    log(LogLevel::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(LogLevel::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(LogLevel::Information, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(LogLevel::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(LogLevel::Error, scope, msg);
}
