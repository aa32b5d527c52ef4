//! Tests for TOML configuration loading.

use logbridge::internal;
use logbridge::{Config, Error, LogLevel, LoggerProvider, MemoryEngine};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn empty_config_is_valid() {
    let config = Config::from_toml("").unwrap();
    let settings = config.to_settings().unwrap();
    assert!(settings.accepted_category_names.is_empty());
    assert!(settings.aliases.is_empty());
    assert_eq!(settings.min_level, None);
    assert!(settings.filter.is_none());
    assert!(!settings.include_scopes);
    assert!(!config.diagnostics.enabled);
    assert_eq!(config.diagnostics_level(), LogLevel::Warning);
}

#[test]
fn settings_section_is_parsed() {
    let config = Config::from_toml(
        r#"
[settings]
accepted_category_names = ["App.*", "*Controller"]
min_level = "information"
include_scopes = true

[settings.aliases]
"App.*" = "OrdersService"
"*Controller" = "Web"
"#,
    )
    .unwrap();

    let settings = config.to_settings().unwrap();
    assert_eq!(settings.accepted_category_names, ["App.*", "*Controller"]);
    assert_eq!(settings.min_level, Some(LogLevel::Information));
    assert!(settings.include_scopes);
    assert_eq!(settings.alias_for("app.*"), Some("OrdersService"));
    assert_eq!(settings.alias_for("*controller"), Some("Web"));
}

#[test]
fn aliases_differing_only_in_case_collapse() {
    let config = Config::from_toml(
        r#"
[settings.aliases]
"App.*" = "Upper"
"app.*" = "Lower"
"#,
    )
    .unwrap();

    let settings = config.to_settings().unwrap();
    assert_eq!(settings.aliases.len(), 1);
}

#[test]
fn invalid_level_is_rejected() {
    let config = Config::from_toml("[settings]\nmin_level = \"loud\"\n").unwrap();
    let err = config.to_settings().unwrap_err();
    assert!(matches!(err, Error::InvalidLevel(ref level) if level == "loud"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Config::from_toml("[settings\n").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn load_from_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("logbridge.toml");
    fs::write(
        &path,
        r#"
[settings]
accepted_category_names = ["App.*"]
min_level = "warning"

[diagnostics]
enabled = false
level = "debug"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.settings.accepted_category_names, ["App.*"]);
    assert_eq!(config.diagnostics_level(), LogLevel::Debug);
}

#[test]
fn missing_file_uses_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("missing.toml")).unwrap();
    assert!(config.settings.accepted_category_names.is_empty());
}

#[test]
fn provider_from_config() {
    let config = Config::from_toml(
        r#"
[settings]
accepted_category_names = ["App.*"]
min_level = "information"
include_scopes = true

[settings.aliases]
"App.*" = "OrdersService"
"#,
    )
    .unwrap();

    let engine = Arc::new(MemoryEngine::new());
    let provider = LoggerProvider::builder()
        .config(&config)
        .unwrap()
        .thread_scopes()
        .shared_engine(engine.clone())
        .build()
        .unwrap();

    let logger = provider.create_logger("App.Orders");
    let _scope = logger.begin_scope("req-1");
    logger.info("done").unwrap();
    logger.debug("hidden").unwrap();
    provider.create_logger("Infra.Db").error("dropped").unwrap();

    let events = engine.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "OrdersService");
    assert_eq!(events[0].message, "=> req-1 |done");
}

#[test]
fn disabled_diagnostics_install_nothing() {
    assert!(!internal::init_with_config(&Config::default()));

    let config = Config::from_toml("[diagnostics]\nenabled = false\nlevel = \"trace\"\n").unwrap();
    assert_eq!(config.diagnostics_level(), LogLevel::Trace);
    assert!(!internal::init_with_config(&config));
}
