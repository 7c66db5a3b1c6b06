//! Tests for the error context extension

use movies_domain::error::Error;
use movies_infrastructure::error_ext::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_wraps_as_infrastructure_error() {
    let err = io_failure().context("Reading fixture").expect_err("error");

    assert!(matches!(err, Error::Infrastructure { source: Some(_), .. }));
    assert_eq!(err.to_string(), "Infrastructure error: Reading fixture: missing");
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context built for a success") })
        .expect("ok");
    assert_eq!(value, 1);

    let err = io_failure()
        .with_context(|| format!("Reading {}", "movies.json"))
        .expect_err("error");
    assert!(err.to_string().contains("Reading movies.json"));
}

#[test]
fn test_config_context_wraps_as_configuration_error() {
    let err = io_failure().config_context("Loading movies.toml").expect_err("error");

    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
    assert!(err.to_string().starts_with("Configuration error: Loading movies.toml"));
}
