use ferrous_resolver_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.resolver.query_timeout_ms, 3000);
    assert_eq!(config.resolver.nameserver_port, 53);
    assert!(config.resolver.dnssec_ok);
    assert_eq!(config.resolver.max_referrals, 32);
    assert_eq!(config.resolver.max_depth, 8);
    assert!(config.resolver.resolve_missing_glue);
    assert_eq!(config.bootstrap.servers, vec!["8.8.8.8:53", "1.1.1.1:53"]);
    assert_eq!(config.bootstrap.timeout_ms, 5000);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = Config::from_toml(
        r#"
        [resolver]
        query_timeout_ms = 750
        dnssec_ok = false
        "#,
    )
    .unwrap();

    assert_eq!(config.resolver.query_timeout_ms, 750);
    assert!(!config.resolver.dnssec_ok);
    assert_eq!(config.resolver.nameserver_port, 53);
    assert_eq!(config.bootstrap.servers.len(), 2);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let result = Config::from_toml("[resolver\nquery_timeout_ms = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_from_file_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [bootstrap]
        servers = ["9.9.9.9:53"]

        [logging]
        level = "warn"
        "#
    )
    .unwrap();

    let overrides = CliOverrides {
        query_timeout_ms: Some(1200),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };
    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.bootstrap.servers, vec!["9.9.9.9:53"]);
    assert_eq!(config.resolver.query_timeout_ms, 1200);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_bootstrap_server_override_replaces_list() {
    let overrides = CliOverrides {
        bootstrap_servers: vec!["192.0.2.53:53".to_string()],
        ..Default::default()
    };
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[resolver]").unwrap();

    let config = Config::load(file.path().to_str(), overrides).unwrap();
    assert_eq!(config.bootstrap.servers, vec!["192.0.2.53:53"]);
}

#[test]
fn test_missing_file_is_read_error() {
    let result = Config::load(
        Some("/nonexistent/ferrous-resolver.toml"),
        CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.resolver.query_timeout_ms = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_empty_bootstrap_servers() {
    let mut config = Config::default();
    config.bootstrap.servers.clear();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_depth_and_referrals() {
    let mut config = Config::default();
    config.resolver.max_depth = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.resolver.max_referrals = 0;
    assert!(config.validate().is_err());
}
