//! Configuration struct definitions.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The `[settings]` section: the shape of [`crate::Settings`] with levels as strings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SettingsConfig {
    /// Accepted category patterns. Empty accepts everything.
    pub accepted_category_names: Vec<String>,
    /// Pattern to routing name. Scanned in key order.
    pub aliases: BTreeMap<String, String>,
    /// Minimum level name, e.g. `"information"`.
    pub min_level: Option<String>,
    /// Prefix messages with active scopes.
    pub include_scopes: bool,
}

/// The `[diagnostics]` section: where logbridge reports on itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Print internal diagnostics to stdout/stderr.
    pub enabled: bool,
    /// Minimum level for internal diagnostics.
    pub level: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "warning".to_string(),
        }
    }
}
