use std::path::PathBuf;

use tempfile::tempdir;

use spendbook_config::{Config, ConfigError, ConfigManager, TOKEN_SECRET_ENV};

#[test]
fn default_config_uses_the_24h_token_ttl() {
    let cfg = Config::default();
    assert_eq!(cfg.token_ttl_hours, 24);
    assert!(cfg.token_secret.is_none());
    assert!(cfg.data_file.is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.token_secret = Some("file-secret".to_string());
    cfg.token_ttl_hours = 12;
    cfg.data_file = Some(PathBuf::from("/tmp/spendbook.json"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("missing.json"));
    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, Config::default());
}

#[test]
fn resolved_secret_prefers_the_environment_override() {
    // Serial with respect to this process: only this test touches the var.
    std::env::set_var(TOKEN_SECRET_ENV, "env-secret");
    let mut cfg = Config::default();
    cfg.token_secret = Some("file-secret".to_string());
    assert_eq!(cfg.resolved_secret().expect("secret"), "env-secret");

    std::env::remove_var(TOKEN_SECRET_ENV);
    assert_eq!(cfg.resolved_secret().expect("secret"), "file-secret");

    cfg.token_secret = None;
    assert!(matches!(
        cfg.resolved_secret(),
        Err(ConfigError::MissingSecret)
    ));
}

#[test]
fn debug_output_redacts_the_secret() {
    let mut cfg = Config::default();
    cfg.token_secret = Some("super-secret".to_string());
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}
