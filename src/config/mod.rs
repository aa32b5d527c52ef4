//! TOML configuration loading.
//!
//! Only the shape is fixed here; a host may just as well build [`Settings`]
//! programmatically. The predicate has no file representation and is always
//! installed in code.

mod structs;

pub use structs::{DiagnosticsConfig, SettingsConfig};

use crate::internal;
use crate::level::LogLevel;
use crate::settings::Settings;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// An empty file is a valid config: every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub settings: SettingsConfig,
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Loads `path`, falling back to defaults when the file does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::warn(
                "CONFIG",
                &format!("Config file not found, using defaults: {}", path.display()),
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Converts the `[settings]` section into typed [`Settings`].
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] when `min_level` names no known level.
    pub fn to_settings(&self) -> Result<Settings, crate::Error> {
        let section = &self.settings;
        let mut settings = Settings::new().include_scopes(section.include_scopes);
        settings
            .accepted_category_names
            .clone_from(&section.accepted_category_names);

        for (pattern, alias) in &section.aliases {
            settings.insert_alias(pattern.clone(), alias.clone());
        }

        if let Some(level) = &section.min_level {
            let parsed = level.parse::<LogLevel>().map_err(|err| {
                internal::error("CONFIG", &format!("Invalid min_level: {level:?}"));
                crate::Error::from(err)
            })?;
            settings = settings.min_level(parsed);
        }

        Ok(settings)
    }

    /// Internal diagnostics level. Unknown names fall back to `Warning`.
    #[must_use]
    pub fn diagnostics_level(&self) -> LogLevel {
        self.diagnostics.level.parse().unwrap_or(LogLevel::Warning)
    }
}
