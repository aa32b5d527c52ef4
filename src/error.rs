//! Unified error type for all logbridge operations.

/// Error type for logbridge operations.
#[derive(Debug)]
pub enum Error {
    /// `log` was called without a message formatter.
    MissingFormatter,
    /// A provider was built without settings.
    MissingSettings,
    /// A provider was built without a scope provider.
    MissingScopeProvider,
    /// A provider was built without an engine to write to.
    MissingEngine,
    /// The underlying engine refused or failed a write.
    Engine(String),
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Invalid log level string.
    InvalidLevel(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFormatter => write!(f, "invalid argument: formatter is required"),
            Self::MissingSettings => write!(f, "invalid argument: settings are required"),
            Self::MissingScopeProvider => {
                write!(f, "invalid argument: scope provider is required")
            }
            Self::MissingEngine => write!(f, "invalid argument: engine is required"),
            Self::Engine(msg) => write!(f, "engine error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
