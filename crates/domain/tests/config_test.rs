use aha_dns_domain::config::server::{DEFAULT_SERVER_ADDRESS, DEFAULT_TLS_PORT};
use aha_dns_domain::{Config, ConfigError, UpstreamScheme};
use serde_json::json;

mod helpers;
use helpers::ConfigJsonBuilder;

#[test]
fn test_minimal_config_applies_server_defaults() {
    let config = Config::from_json(&ConfigJsonBuilder::new().build()).unwrap();

    assert_eq!(config.server.address, DEFAULT_SERVER_ADDRESS);
    assert_eq!(config.server.udp_port, 53);
    assert_eq!(config.server.tcp_port, 53);
    assert_eq!(config.server.tls_port, DEFAULT_TLS_PORT);
    assert_eq!(config.server.http_port, 80);
    assert_eq!(config.server.https_port, 443);
    assert!(config.log.enabled);
    assert_eq!(config.log.level, "info");
}

#[test]
fn test_partial_server_object_keeps_given_fields() {
    let json = ConfigJsonBuilder::new()
        .set("/server", json!({ "address": "1.1.1.1", "http_port": 8080 }))
        .build();
    let config = Config::from_json(&json).unwrap();

    assert_eq!(config.server.address, "1.1.1.1");
    assert_eq!(config.server.http_port, 8080);
    assert_eq!(config.server.udp_port, 53);
}

#[test]
fn test_bare_server_string_layout() {
    let json = ConfigJsonBuilder::new()
        .set("/server", json!("8.8.4.4"))
        .build();
    let config = Config::from_json(&json).unwrap();

    assert_eq!(config.server.address, "8.8.4.4");
    assert_eq!(config.server.https_port, 443);
}

#[test]
fn test_unknown_top_level_field_rejected() {
    let json = ConfigJsonBuilder::new().set("/cache", json!(true)).build();
    assert!(matches!(Config::from_json(&json), Err(ConfigError::Parse(_))));
}

#[test]
fn test_unknown_nested_field_rejected() {
    let json = ConfigJsonBuilder::new()
        .set("/dns/udp/workers", json!(4))
        .build();
    assert!(matches!(Config::from_json(&json), Err(ConfigError::Parse(_))));

    let json = ConfigJsonBuilder::new()
        .set("/server", json!({ "address": "1.1.1.1", "quic_port": 853 }))
        .build();
    assert!(Config::from_json(&json).is_err());
}

#[test]
fn test_missing_credentials_rejected() {
    let json = ConfigJsonBuilder::new()
        .set("/api/access_key_secret", json!(""))
        .build();
    assert!(matches!(
        Config::from_json(&json),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_hostname_server_address_rejected() {
    let json = ConfigJsonBuilder::new()
        .set("/server", json!("resolver.example.com"))
        .build();
    assert!(matches!(
        Config::from_json(&json),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_no_listener_rejected() {
    let json = ConfigJsonBuilder::new()
        .set("/dns/udp/enabled", json!(false))
        .build();
    assert!(Config::from_json(&json).is_err());
}

#[test]
fn test_tls_listener_requires_tls_material() {
    let json = ConfigJsonBuilder::new()
        .set("/dns/tls", json!({ "enabled": true }))
        .build();
    let err = Config::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("TLS options are not enabled"));

    let json = ConfigJsonBuilder::new()
        .set("/dns/tls", json!({ "enabled": true }))
        .set("/tls", json!({ "enabled": true, "key_path": "key.pem" }))
        .build();
    let err = Config::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("certificate path"));

    let json = ConfigJsonBuilder::new()
        .set("/dns/tls", json!({ "enabled": true }))
        .set(
            "/tls",
            json!({ "enabled": true, "cert_path": "cert.pem", "key_path": "key.pem" }),
        )
        .build();
    assert!(Config::from_json(&json).is_ok());
}

#[test]
fn test_unknown_extra_method_rejected() {
    let json = ConfigJsonBuilder::new()
        .set("/api/extra", json!({ "enabled": true, "method": "quic" }))
        .build();
    assert!(matches!(Config::from_json(&json), Err(ConfigError::Parse(_))));
}

#[test]
fn test_upstream_target_http_default() {
    let config = Config::from_json(&ConfigJsonBuilder::new().build()).unwrap();
    let target = config.upstream_target().unwrap();

    assert_eq!(target.scheme, UpstreamScheme::Http);
    assert_eq!(target.http_authority, "223.5.5.5:80");
    assert_eq!(target.resolve_endpoint(), "http://223.5.5.5:80/resolve");
    assert!(target.forward_addr.is_none());
}

#[test]
fn test_upstream_target_https_with_forwarding() {
    let json = ConfigJsonBuilder::new()
        .set("/server", json!({ "address": "2400:3200::1", "udp_port": 5300 }))
        .set("/api/extra", json!({ "enabled": true, "method": "https" }))
        .build();
    let config = Config::from_json(&json).unwrap();
    let target = config.upstream_target().unwrap();

    assert_eq!(target.scheme, UpstreamScheme::Https);
    assert_eq!(target.http_authority, "[2400:3200::1]:443");
    assert_eq!(
        target.forward_addr,
        Some("[2400:3200::1]:5300".parse().unwrap())
    );
}

#[test]
fn test_listener_authority_formatting() {
    let json = ConfigJsonBuilder::new()
        .set("/dns/tcp", json!({ "enabled": true, "listen": "::1" }))
        .build();
    let config = Config::from_json(&json).unwrap();

    assert_eq!(config.dns.udp.authority(53).unwrap(), "127.0.0.1:5353");
    assert_eq!(config.dns.tcp.authority(53).unwrap(), "[::1]:53");
    assert_eq!(config.dns.tls.authority(853).unwrap(), "0.0.0.0:853");
}

#[test]
fn test_credentials_copied_from_api_section() {
    let config = Config::from_json(&ConfigJsonBuilder::new().build()).unwrap();
    let creds = config.credentials();

    assert_eq!(creds.account_id, "100000");
    assert_eq!(creds.access_key_id, "ak-test");
    assert_eq!(creds.access_key_secret, "sk-test");
}

#[test]
fn test_log_section_parsed() {
    let json = ConfigJsonBuilder::new()
        .set("/log", json!({ "enabled": false, "level": "debug" }))
        .build();
    let config = Config::from_json(&json).unwrap();
    assert!(!config.log.enabled);
    assert_eq!(config.log.level, "debug");
}

#[test]
fn test_config_without_log_section() {
    let json = ConfigJsonBuilder::new().remove("log").build();
    assert!(Config::from_json(&json).is_ok());
}

#[test]
fn test_load_missing_file() {
    let err = Config::load("/nonexistent/aha-dns.json").unwrap_err();
    assert!(matches!(err, ConfigError::FileRead(..)));
}
