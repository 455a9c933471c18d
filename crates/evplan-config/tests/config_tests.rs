use std::fs;

use evplan_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_targets_indian_rupees() {
    let cfg = Config::default();

    assert_eq!(cfg.currency, "INR");
    assert_eq!(cfg.locale, "en-IN");
    assert_eq!(cfg.max_scenarios, 5);
    assert!(!cfg.strict_validation);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
    assert!(manager.backups_dir().is_dir());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let mut cfg = Config::default();
    cfg.set("currency", "usd").expect("currency");
    cfg.set("strict_validation", "yes").expect("strict");
    cfg.set("pricing_file", "/tmp/prices.json").expect("pricing");

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "USD");
    assert!(loaded.strict_validation);
    assert_eq!(loaded.get("pricing_file").as_deref(), Some("/tmp/prices.json"));
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn older_files_without_new_keys_still_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "locale": "en-IN", "currency": "INR" }"#).expect("write");

    let manager = ConfigManager::new(path, dir.path().join("backups"));
    let loaded = manager.load().expect("load");

    assert!(loaded.ui_color_enabled);
    assert_eq!(loaded.recalc_debounce_ms, 500);
    assert!(loaded.data_dir.is_none());
}

#[test]
fn corrupt_file_reports_serialization_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").expect("write");

    let manager = ConfigManager::new(path, dir.path().join("backups"));
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}

#[test]
fn set_rejects_unknown_keys_and_bad_values() {
    let mut cfg = Config::default();

    assert!(matches!(cfg.set("theme", "dark"), Err(ConfigError::UnknownKey(key)) if key == "theme"));
    assert!(matches!(
        cfg.set("max_scenarios", "0"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set("ui_color_enabled", "maybe"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert_eq!(cfg, Config::default());

    cfg.set("data_dir", "/srv/evplan").expect("data dir");
    cfg.set("data_dir", "").expect("clear data dir");
    assert!(cfg.data_dir.is_none());
}

#[test]
fn backups_round_trip_and_list_newest_first() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");
    let backups = manager.backups_dir().to_path_buf();

    fs::write(backups.join("config_20230101_0800.json"), "{}").expect("old");
    fs::write(backups.join("config_20231231_2300_year-end.json"), "{}").expect("newer");
    fs::write(backups.join("readme.txt"), "ignored").expect("other");

    let mut cfg = Config::default();
    cfg.set("locale", "hi-IN").expect("locale");
    let name = manager.backup(&cfg, Some("Before Diwali")).expect("backup");
    assert!(name.starts_with("config_"));
    assert!(name.ends_with("_before-diwali.json"));

    let listed = manager.list_backups().expect("list");
    assert_eq!(
        listed,
        vec![
            name.clone(),
            "config_20231231_2300_year-end.json".to_string(),
            "config_20230101_0800.json".to_string(),
        ]
    );

    let restored = manager.restore(&name).expect("restore");
    assert_eq!(restored.locale, "hi-IN");
}

#[test]
fn restore_refuses_unknown_or_nested_names() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");
    manager.save(&Config::default()).expect("save");

    assert!(matches!(
        manager.restore("config_20990101_0000.json"),
        Err(ConfigError::Io(_))
    ));
    assert!(matches!(
        manager.restore("../config.json"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn data_dir_falls_back_to_application_dir() {
    let app_dir = std::path::Path::new("/home/planner/.evplan");
    let mut cfg = Config::default();
    assert_eq!(cfg.resolve_data_dir(app_dir), app_dir);

    cfg.set("data_dir", "/srv/events").expect("data dir");
    assert_eq!(
        cfg.resolve_data_dir(app_dir),
        std::path::PathBuf::from("/srv/events")
    );
}
