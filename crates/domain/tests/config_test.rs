use kube_extdns_domain::config::{ConfigError, LogFormat};
use kube_extdns_domain::{CliOverrides, Config, ExternalNameConfig};

#[test]
fn test_extname_defaults() {
    let config = ExternalNameConfig::default();

    assert!(config.zones.is_empty());
    assert_eq!(config.ttl_seconds, 120);
    assert!(config.continue_on_no_match);
}

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.origins, vec![".".to_string()]);
    assert!(config.registry.services_file.is_none());
    assert_eq!(config.registry.reload_interval_secs, 30);
    assert!(config.upstream.servers.is_empty());
    assert_eq!(config.upstream.timeout_ms, 2000);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_full_config() {
    let toml_str = r#"
        [server]
        dns_port = 5353
        bind_address = "127.0.0.1"

        [extname]
        zones = ["kube.service."]
        ttl_seconds = 60
        continue_on_no_match = false

        [registry]
        services_file = "/tmp/services.json"
        reload_interval_secs = 10

        [upstream]
        servers = ["1.1.1.1:53"]
        timeout_ms = 500

        [logging]
        level = "debug"
        format = "json"
    "#;

    let config = Config::from_toml(toml_str).unwrap();

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.extname.zones, vec!["kube.service.".to_string()]);
    assert_eq!(config.extname.ttl_seconds, 60);
    assert!(!config.extname.continue_on_no_match);
    assert_eq!(
        config.registry.services_file.as_deref(),
        Some("/tmp/services.json")
    );
    assert_eq!(config.upstream.timeout_ms, 500);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.validate().is_ok());
    assert_eq!(config.upstream_addresses().unwrap().len(), 1);
}

#[test]
fn test_unknown_extname_key_is_rejected() {
    let toml_str = r#"
        [extname]
        ttlSeconds = 60
    "#;

    let result = Config::from_toml(toml_str);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_unknown_section_is_rejected() {
    let toml_str = r#"
        [kubernetes]
        endpoint = "https://10.0.0.1"
    "#;

    assert!(matches!(
        Config::from_toml(toml_str),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_non_integer_ttl_is_rejected() {
    let toml_str = r#"
        [extname]
        ttl_seconds = "sixty"
    "#;

    assert!(matches!(
        Config::from_toml(toml_str),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_negative_ttl_is_rejected() {
    let toml_str = r#"
        [extname]
        ttl_seconds = -1
    "#;

    assert!(matches!(
        Config::from_toml(toml_str),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_non_boolean_flag_is_rejected() {
    let toml_str = r#"
        [extname]
        continue_on_no_match = "yes"
    "#;

    assert!(matches!(
        Config::from_toml(toml_str),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_zones_fall_back_to_server_origins() {
    let toml_str = r#"
        [server]
        origins = ["Cluster.Local"]
    "#;

    let config = Config::from_toml(toml_str).unwrap();
    let zones = config.zone_set().unwrap();

    assert_eq!(zones.zones().len(), 1);
    assert_eq!(&*zones.zones()[0], "cluster.local.");
}

#[test]
fn test_explicit_zones_take_precedence_over_origins() {
    let toml_str = r#"
        [server]
        origins = ["cluster.local."]

        [extname]
        zones = ["kube.service.", "ext.example.org."]
    "#;

    let config = Config::from_toml(toml_str).unwrap();
    let zones = config.zone_set().unwrap();

    assert_eq!(zones.zones().len(), 2);
    assert_eq!(zones.matches("a.ext.example.org."), Some("ext.example.org."));
    assert_eq!(zones.matches("a.cluster.local."), None);
}

#[test]
fn test_validate_rejects_invalid_zone() {
    let toml_str = r#"
        [extname]
        zones = ["kube..service"]
    "#;

    let config = Config::from_toml(toml_str).unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_bad_upstream() {
    let toml_str = r#"
        [upstream]
        servers = ["not-an-address"]
    "#;

    let config = Config::from_toml(toml_str).unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_cli_overrides_are_applied() {
    let overrides = CliOverrides {
        dns_port: Some(1053),
        bind_address: Some("127.0.0.1".to_string()),
        services_file: Some("services.toml".to_string()),
        log_level: Some("trace".to_string()),
    };

    let config = Config::load(Some(&write_temp_config()), overrides).unwrap();

    assert_eq!(config.server.dns_port, 1053);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(
        config.registry.services_file.as_deref(),
        Some("services.toml")
    );
    assert_eq!(config.logging.level, "trace");
    assert_eq!(
        config.dns_bind_address().unwrap().to_string(),
        "127.0.0.1:1053"
    );
}

#[test]
fn test_load_missing_file_fails() {
    let result = Config::load(
        Some("/nonexistent/kube-extdns.toml"),
        CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

fn write_temp_config() -> String {
    let path = std::env::temp_dir().join(format!(
        "kube-extdns-config-test-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "[extname]\nzones = [\"kube.service.\"]\n").unwrap();
    path.to_string_lossy().into_owned()
}
