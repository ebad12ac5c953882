mod common;

use common::temp_config;
use storefront::config::{Config, ConfigError};

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "https://api.escuelajs.co/api/v1");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert!(config.api.auth_token.is_none());

    assert_eq!(config.pagination.product_page_size, 10);
    assert_eq!(config.pagination.user_page_size, 20);
    assert_eq!(config.pagination.product_total_count, None);

    assert_eq!(config.catalog.featured_limit, 10);
    assert_eq!(config.catalog.featured_offset, 10);
    assert_eq!(config.catalog.deals_limit, 20);
    assert_eq!(config.catalog.deals_offset, 1);
    assert_eq!(config.catalog.category_limit, 5);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("storefront/config.toml"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "http://localhost:3000/api/v1"

[pagination]
product_total_count = 200
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:3000/api/v1");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.pagination.product_total_count, Some(200));
    assert_eq!(config.pagination.user_page_size, 20);
    assert_eq!(config.catalog.featured_limit, 10);
}

#[test]
fn test_full_file() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://shop.example.com/api"
timeout_seconds = 3
connect_timeout_seconds = 1
auth_token = "abc"

[pagination]
product_page_size = 12
user_page_size = 8

[catalog]
featured_limit = 4
featured_offset = 0
deals_limit = 6
deals_offset = 2
category_limit = 3
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.auth_token.as_deref(), Some("abc"));
    assert_eq!(config.api.timeout_seconds, 3);
    assert_eq!(config.pagination.product_page_size, 12);
    assert_eq!(config.pagination.user_page_size, 8);
    assert_eq!(config.catalog.deals_offset, 2);
    assert_eq!(config.catalog.category_limit, 3);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_page_size_is_validation_error() {
    let (_dir, path) = temp_config("[pagination]\nuser_page_size = 0\n");

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("user_page_size"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_non_http_base_url_rejected() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"ftp://example.com\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_malformed_base_url_rejected() {
    let mut config = Config::default();
    config.api.base_url = "not a url".to_string();
    assert!(config.validate().is_err());
}
