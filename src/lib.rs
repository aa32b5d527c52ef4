//! `logbridge` - the decision layer between a structured logging facade and a
//! logging engine.
//!
//! Application code logs against a [`LoggerAdapter`] per category. The adapter
//! decides whether the event goes through (category accept-list, minimum level,
//! custom predicate), picks the routing name (category aliases), translates the
//! level, prefixes the active scopes, and hands the result to an [`Engine`].
//!
//! # Example
//!
//! ```
//! use logbridge::{LogLevel, LoggerProvider, MemoryEngine, Settings};
//! use std::sync::Arc;
//!
//! let engine = Arc::new(MemoryEngine::new());
//! let provider = LoggerProvider::builder()
//!     .settings(
//!         Settings::new()
//!             .accept("App.*")
//!             .alias("App.*", "OrdersService")
//!             .min_level(LogLevel::Information)
//!             .include_scopes(true),
//!     )
//!     .thread_scopes()
//!     .shared_engine(engine.clone())
//!     .build()
//!     .unwrap();
//!
//! let logger = provider.create_logger("App.Orders");
//! let _request = logger.begin_scope("req-1");
//! logger.info("done").unwrap();
//! logger.debug("filtered out").unwrap();
//!
//! assert_eq!(engine.messages(), ["=> req-1 |done"]);
//! assert_eq!(engine.events()[0].name, "OrdersService");
//! ```

pub mod category;
pub mod config;
pub mod engine;
mod error;
pub mod filter;
pub mod internal;
pub mod level;
pub mod logger;
pub mod scope;
pub mod settings;

pub use config::Config;
pub use engine::{Engine, EngineEvent, MemoryEngine, RecordedEvent, StreamEngine};
pub use error::Error;
pub use filter::LevelPredicate;
pub use level::{EngineLevel, LogLevel, map_level, map_raw_level};
pub use logger::{EventId, FormatterFn, LoggerAdapter, LoggerProvider, ProviderBuilder};
pub use scope::{ScopeGuard, ScopeProvider, ThreadScopeProvider};
pub use settings::Settings;
