//! Line-per-event engine for stdout/stderr or any `Write` sink.

use super::{Engine, EngineEvent};
use crate::level::EngineLevel;

use chrono::Local;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Where a [`StreamEngine`] sends its lines.
pub enum StreamTarget {
    /// Warn and above to stderr, everything else to stdout.
    Stdio,
    /// Every line to one writer.
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// Writes `timestamp LEVEL name  message[: error]` lines.
pub struct StreamEngine {
    target: StreamTarget,
    /// `None` drops the timestamp column.
    timestamp_format: Option<String>,
}

impl Default for StreamEngine {
    fn default() -> Self {
        Self::stdio()
    }
}

impl StreamEngine {
    #[must_use]
    pub fn stdio() -> Self {
        Self {
            target: StreamTarget::Stdio,
            timestamp_format: Some("%Y-%m-%d %H:%M:%S".to_string()),
        }
    }

    /// Sends every line to `writer`.
    #[must_use]
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            target: StreamTarget::Writer(Mutex::new(Box::new(writer))),
            timestamp_format: Some("%Y-%m-%d %H:%M:%S".to_string()),
        }
    }

    /// `chrono` strftime syntax.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    /// Deterministic output for tests and for sinks that stamp lines themselves.
    #[must_use]
    pub fn without_timestamps(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    fn format_event(&self, event: &EngineEvent<'_>) -> String {
        let mut line = String::with_capacity(event.message.len() + 64);
        if let Some(format) = &self.timestamp_format {
            let _ = write!(line, "{} ", Local::now().format(format));
        }
        let _ = write!(line, "{} {}  {}", event.level.label(), event.name, event.message);
        if let Some(error) = event.error {
            let _ = write!(line, ": {error}");
        }
        line
    }
}

impl Engine for StreamEngine {
    fn write(&self, event: &EngineEvent<'_>) -> Result<(), crate::Error> {
        if event.level == EngineLevel::Off {
            return Ok(());
        }

        let line = self.format_event(event);
        match &self.target {
            StreamTarget::Stdio if event.level >= EngineLevel::Warn => {
                writeln!(io::stderr(), "{line}")?;
            }
            StreamTarget::Stdio => writeln!(io::stdout(), "{line}")?,
            StreamTarget::Writer(writer) => {
                let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
                writeln!(writer, "{line}")?;
            }
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match &self.target {
            StreamTarget::Stdio => {
                io::stdout().flush()?;
                io::stderr().flush()?;
            }
            StreamTarget::Writer(writer) => {
                writer
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .flush()?;
            }
        }
        Ok(())
    }
}
