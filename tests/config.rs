use ems_lite::config::Config;
use ems_lite::constants::{API_URL_ENV, DEFAULT_API_URL};
use ems_lite::utils::datetime;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, DEFAULT_API_URL);
    assert_eq!(config.ui.default_page, "dashboard");
    assert_eq!(config.ui.date_format, datetime::API_DATE_FORMAT);
    assert_eq!(config.banners.success_duration(), Duration::from_secs(3));
    assert_eq!(config.banners.error_duration(), Duration::from_secs(5));
    assert!(!config.logging.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    config.api.base_url = "localhost:8000".to_string();
    assert!(config.validate().is_err());
    config.api.base_url = "ftp://files.company.com".to_string();
    assert!(config.validate().is_err());
    config.api.base_url = "https://ems.company.com/backend/".to_string();
    assert!(config.validate().is_ok());

    config.ui.default_page = "reports".to_string();
    assert!(config.validate().is_err());
    config.ui.default_page = "attendance".to_string();
    assert!(config.validate().is_ok());

    config.ui.date_format = "%d %B %Y".to_string();
    assert!(config.validate().is_ok());
    config.ui.date_format = "%H:%M".to_string();
    assert!(config.validate().is_err());
    config.ui.date_format = datetime::API_DATE_FORMAT.to_string();

    config.banners.success_seconds = 0;
    assert!(config.validate().is_err());
    config.banners.success_seconds = 3;
    config.banners.error_seconds = 61;
    assert!(config.validate().is_err());
    config.banners.error_seconds = 60;
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[api]
base_url = "http://10.0.0.5:9000"

[banners]
error_seconds = 8
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
    assert_eq!(config.banners.error_seconds, 8);

    // unspecified values use defaults
    assert_eq!(config.banners.success_seconds, 3);
    assert_eq!(config.ui.default_page, "dashboard");
    assert!(!config.logging.enabled);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.ui.date_format, default_config.ui.date_format);
    assert_eq!(config.banners.success_seconds, default_config.banners.success_seconds);
}

#[test]
fn test_config_serialization() {
    let toml_str = toml::to_string_pretty(&Config::default()).unwrap();
    assert!(toml_str.contains("base_url = \"http://localhost:8000\""));
    assert!(toml_str.contains("default_page = \"dashboard\""));
    assert!(toml_str.contains("success_seconds = 3"));
}

#[test]
fn test_env_overrides_file_value() {
    let mut config = Config::default();
    config.api.base_url = "http://from-file:8000".to_string();

    config.apply_env(|key| (key == API_URL_ENV).then(|| " http://from-env:9000 ".to_string()));
    assert_eq!(config.api.base_url, "http://from-env:9000");
}

#[test]
fn test_env_unset_or_empty_keeps_value() {
    let mut config = Config::default();
    config.api.base_url = "http://from-file:8000".to_string();

    config.apply_env(|_| None);
    assert_eq!(config.api.base_url, "http://from-file:8000");

    config.apply_env(|_| Some("   ".to_string()));
    assert_eq!(config.api.base_url, "http://from-file:8000");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[ui]
default_page = "employees"
date_format = "%d/%m/%Y"

[logging]
enabled = true
"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.ui.default_page, "employees");
    assert_eq!(config.ui.date_format, "%d/%m/%Y");
    assert!(config.logging.enabled);
    assert_eq!(config.api.base_url, DEFAULT_API_URL);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "[banners]\nsuccess_seconds = 600\n").unwrap();
    assert!(Config::load_with(Some(path.as_path()), |_| None).is_err());

    std::fs::write(&path, "[ui\ndefault_page = ").unwrap();
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));

    let missing = dir.path().join("missing.toml");
    let err = Config::load_with(Some(missing.as_path()), |_| None).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config file"));
}

#[test]
fn test_env_url_replaces_invalid_file_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nbase_url = \"localhost:8000\"\n").unwrap();

    assert!(Config::load_with(Some(path.as_path()), |_| None).is_err());

    let config =
        Config::load_with(Some(path.as_path()), |key| (key == API_URL_ENV).then(|| "http://10.0.0.5:9000".to_string())).unwrap();
    assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
}

#[test]
fn test_load_without_file_uses_defaults() {
    let config = Config::load_with(None, |_| None).unwrap();
    assert_eq!(config.api.base_url, DEFAULT_API_URL);
}

#[test]
fn test_default_config_path() {
    if let Some(path) = Config::get_default_config_path() {
        assert!(path.ends_with("ems-lite/config.toml"));
    }
}
