//! Tests for configuration defaults, TOML loading and validation

use std::io::Write;
use std::time::Duration;

use movies_domain::value_objects::EntityKind;
use movies_infrastructure::config::loader::validate_app_config;
use movies_infrastructure::config::{AppConfig, ConfigLoader};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".toml").expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_defaults_are_valid() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.search.provider, "elasticsearch");
    assert_eq!(config.cache.provider, "redis");
    assert!(config.cache.enabled);
    assert_eq!(config.cache.namespace, "movies");
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_default_ttl_is_five_minutes_per_kind() {
    let config = AppConfig::default();

    for kind in [EntityKind::Film, EntityKind::Person, EntityKind::Genre] {
        assert_eq!(config.cache.ttl(kind), Duration::from_secs(300));
    }
}

#[test]
fn test_toml_file_overrides_defaults() {
    let file = write_config(
        r#"
[server]
port = 9000

[search]
provider = "memory"
url = ""

[cache]
provider = "moka"
films_ttl_secs = 60
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("load config");

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.search.provider, "memory");
    assert_eq!(config.cache.provider, "moka");
    assert_eq!(config.cache.ttl(EntityKind::Film), Duration::from_secs(60));
    assert_eq!(config.cache.ttl(EntityKind::Person), Duration::from_secs(300));
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let loader = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));

    let config = loader.load().expect("load config");

    assert_eq!(config.server.port, AppConfig::default().server.port);
    assert!(loader.config_path().is_some());
}

#[test]
fn test_invalid_file_is_a_configuration_error() {
    let file = write_config("[server]\nport = \"not a number\"\n");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("port must be numeric");

    assert!(err.to_string().contains("Configuration error"), "{err}");
}

#[test]
fn test_zero_port_rejected() {
    let mut config = AppConfig::default();
    config.server.port = 0;

    let err = validate_app_config(&config).expect_err("port 0");
    assert!(err.to_string().contains("port"), "{err}");
}

#[test]
fn test_empty_elasticsearch_url_rejected() {
    let mut config = AppConfig::default();
    config.search.url = String::new();

    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_empty_url_allowed_for_memory_backend() {
    let mut config = AppConfig::default();
    config.search.provider = "memory".to_string();
    config.search.url = String::new();

    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_zero_timeouts_rejected() {
    let mut config = AppConfig::default();
    config.search.timeout_secs = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.cache.timeout_secs = 0;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_zero_ttl_rejected_only_when_caching() {
    let mut config = AppConfig::default();
    config.cache.genres_ttl_secs = 0;

    let err = validate_app_config(&config).expect_err("zero ttl");
    assert!(err.to_string().contains("TTL"), "{err}");

    config.cache.enabled = false;
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_unknown_log_level_rejected() {
    let mut config = AppConfig::default();
    config.logging.level = "loud".to_string();

    let err = validate_app_config(&config).expect_err("bad level");
    assert!(err.to_string().contains("loud"), "{err}");
}

#[test]
fn test_saved_config_loads_back() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("movies.toml");

    let mut config = AppConfig::default();
    config.server.port = 8123;
    config.cache.persons_ttl_secs = 42;

    let loader = ConfigLoader::new();
    loader.save_to_file(&config, &path).expect("save config");

    let loaded = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("load config");
    assert_eq!(loaded.server.port, 8123);
    assert_eq!(loaded.cache.persons_ttl_secs, 42);
}
