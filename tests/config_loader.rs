use std::fs;
use std::time::Duration;

use formtodo::config::{Config, ConfigError, ConfigOverrides, ConfigStore, StartView};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.timing.submit_delay_ms, 2000);
    assert_eq!(config.timing.add_delay_ms, 2000);
    assert_eq!(config.timing.edit_delay_ms, 2000);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.ui.start_view, StartView::Registration);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("formtodo/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[timing]
add_delay_ms = 10

[ui]
start_view = "todos"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timing.add_delay_ms, 10);
    assert_eq!(config.timing.submit_delay_ms, 2000);
    assert_eq!(config.ui.start_view, StartView::Todos);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[timing\nadd_delay_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_excessive_delay_fails_validation() {
    let mut config = Config::default();
    config.timing.edit_delay_ms = 3_600_000;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("timing.edit_delay_ms"));
}

#[test]
fn test_overrides_apply_to_every_delay() {
    let mut config = Config::default();
    ConfigOverrides {
        start_view: Some(StartView::Todos),
        delay_ms: Some(5),
    }
    .apply(&mut config);
    assert_eq!(config.timing.submit_delay_ms, 5);
    assert_eq!(config.timing.add_delay_ms, 5);
    assert_eq!(config.timing.edit_delay_ms, 5);
    assert_eq!(config.ui.start_view, StartView::Todos);
}

#[test]
fn test_reload_picks_up_changes_and_keeps_overrides() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[timing]\nadd_delay_ms = 100\n");
    let overrides = ConfigOverrides {
        start_view: None,
        delay_ms: Some(1),
    };
    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone(), overrides);
    assert_eq!(store.get().timing.add_delay_ms, 1);

    fs::write(&path, "[ui]\nstart_view = \"todos\"\n").unwrap();
    store.reload().unwrap();
    let config = store.get();
    assert_eq!(config.ui.start_view, StartView::Todos);
    assert_eq!(config.timing.add_delay_ms, 1);
}

#[test]
fn test_failed_reload_keeps_previous_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[ui]\ntick_rate_ms = 100\n");
    let store = ConfigStore::new(
        Config::load_from(&path).unwrap(),
        path.clone(),
        ConfigOverrides::default(),
    );

    fs::write(&path, "not = [valid").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().ui.tick_rate_ms, 100);
    assert_eq!(store.path(), path.as_path());
}
