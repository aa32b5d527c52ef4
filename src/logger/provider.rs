//! One adapter per category name, created on first request and cached after that.

use super::LoggerAdapter;
use crate::config::Config;
use crate::engine::Engine;
use crate::internal;
use crate::scope::{ScopeProvider, ThreadScopeProvider};
use crate::settings::Settings;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Factory that hands out [`LoggerAdapter`]s sharing one settings value, one
/// scope provider, and one engine.
pub struct LoggerProvider {
    settings: Arc<Settings>,
    scopes: Arc<dyn ScopeProvider>,
    engine: Arc<dyn Engine>,
    loggers: Mutex<HashMap<String, Arc<LoggerAdapter>>>,
}

impl LoggerProvider {
    #[must_use]
    pub fn builder() -> ProviderBuilder {
        ProviderBuilder::new()
    }

    /// Returns the adapter for `category`, creating it on first use.
    #[must_use]
    pub fn create_logger(&self, category: &str) -> Arc<LoggerAdapter> {
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(logger) = loggers.get(category) {
            return Arc::clone(logger);
        }

        let logger = Arc::new(LoggerAdapter::new(
            category,
            Arc::clone(&self.settings),
            Arc::clone(&self.scopes),
            Arc::clone(&self.engine),
        ));
        internal::debug(
            "PROVIDER",
            &format!(
                "Created logger category={category:?} accepted={} routing={:?}",
                logger.is_accepted(),
                logger.routing_name()
            ),
        );
        loggers.insert(category.to_string(), Arc::clone(&logger));
        logger
    }

    /// Number of distinct categories created so far.
    #[must_use]
    pub fn logger_count(&self) -> usize {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }

    #[must_use]
    pub fn scope_provider(&self) -> &Arc<dyn ScopeProvider> {
        &self.scopes
    }

    #[must_use]
    pub fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }

    /// # Errors
    /// Whatever the engine's flush returns.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.engine.flush()
    }
}

/// Collects the three collaborators a provider cannot work without.
///
/// `build` refuses to produce a provider while any of them is missing.
#[derive(Default)]
pub struct ProviderBuilder {
    settings: Option<Arc<Settings>>,
    scopes: Option<Arc<dyn ScopeProvider>>,
    engine: Option<Arc<dyn Engine>>,
}

impl ProviderBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(Arc::new(settings));
        self
    }

    /// Shares settings that are already behind an `Arc`.
    #[must_use]
    pub fn shared_settings(mut self, settings: Arc<Settings>) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Takes the settings section of a loaded config file.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] when the config names an unknown level.
    pub fn config(self, config: &Config) -> Result<Self, crate::Error> {
        Ok(self.settings(config.to_settings()?))
    }

    #[must_use]
    pub fn scope_provider(mut self, scopes: impl ScopeProvider + 'static) -> Self {
        self.scopes = Some(Arc::new(scopes));
        self
    }

    #[must_use]
    pub fn shared_scope_provider(mut self, scopes: Arc<dyn ScopeProvider>) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Uses a fresh [`ThreadScopeProvider`].
    #[must_use]
    pub fn thread_scopes(self) -> Self {
        self.scope_provider(ThreadScopeProvider::new())
    }

    #[must_use]
    pub fn engine(mut self, engine: impl Engine + 'static) -> Self {
        self.engine = Some(Arc::new(engine));
        self
    }

    #[must_use]
    pub fn shared_engine(mut self, engine: Arc<dyn Engine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// # Errors
    /// `MissingSettings`, `MissingScopeProvider` or `MissingEngine`, checked in that order.
    pub fn build(self) -> Result<LoggerProvider, crate::Error> {
        let settings = self.settings.ok_or(crate::Error::MissingSettings)?;
        let scopes = self.scopes.ok_or(crate::Error::MissingScopeProvider)?;
        let engine = self.engine.ok_or(crate::Error::MissingEngine)?;

        internal::debug(
            "PROVIDER",
            &format!(
                "Provider ready: {} accepted patterns, {} aliases, min_level={}, scopes={}",
                settings.accepted_category_names.len(),
                settings.aliases.len(),
                settings
                    .min_level
                    .map_or_else(|| "unset".to_string(), |level| level.to_string()),
                settings.include_scopes
            ),
        );

        Ok(LoggerProvider {
            settings,
            scopes,
            engine,
            loggers: Mutex::new(HashMap::new()),
        })
    }
}

impl std::fmt::Debug for LoggerProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerProvider")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
