//! Tests for `MOVIES__` environment overrides
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p movies-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! `env::set_var`/`env::remove_var` are `unsafe` in Rust 2024; the tests
//! MUST run with `--test-threads=1` to prevent data races.

use std::env;
use std::io::Write;

use movies_infrastructure::config::ConfigLoader;
use tempfile::NamedTempFile;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_nested_env_vars_override_defaults() {
    set_env("MOVIES__SERVER__PORT", "9100");
    set_env("MOVIES__SEARCH__URL", "http://search:9200");
    set_env("MOVIES__CACHE__FILMS_TTL_SECS", "30");

    let result = ConfigLoader::new().load();

    remove_env("MOVIES__SERVER__PORT");
    remove_env("MOVIES__SEARCH__URL");
    remove_env("MOVIES__CACHE__FILMS_TTL_SECS");

    let config = result.expect("load config");
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.search.url, "http://search:9200");
    assert_eq!(config.cache.films_ttl_secs, 30);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_wins_over_file() {
    let mut file = NamedTempFile::with_suffix(".toml").expect("create temp file");
    file.write_all(b"[cache]\nnamespace = \"from-file\"\n")
        .expect("write temp file");
    set_env("MOVIES__CACHE__NAMESPACE", "from-env");

    let result = ConfigLoader::new().with_config_path(file.path()).load();

    remove_env("MOVIES__CACHE__NAMESPACE");

    assert_eq!(result.expect("load config").cache.namespace, "from-env");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_is_ignored() {
    set_env("MOVIES_SERVER_PORT", "9200");

    let result = ConfigLoader::new().load();

    remove_env("MOVIES_SERVER_PORT");

    assert_eq!(result.expect("load config").server.port, 8000);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_invalid_env_value_fails_validation() {
    set_env("MOVIES__CACHE__PERSONS_TTL_SECS", "0");

    let result = ConfigLoader::new().load();

    remove_env("MOVIES__CACHE__PERSONS_TTL_SECS");

    assert!(result.is_err());
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_env_prefix() {
    set_env("CATALOG__SERVER__PORT", "9300");

    let result = ConfigLoader::new().with_env_prefix("CATALOG").load();

    remove_env("CATALOG__SERVER__PORT");

    assert_eq!(result.expect("load config").server.port, 9300);
}
