use serde::{Deserialize, Serialize};
use std::io::Read;
use std::net::SocketAddr;

use super::address::join_ip_port;
use super::api::ApiConfig;
use super::errors::ConfigError;
use super::listen::DnsListenersConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::tls::TlsConfig;
use crate::upstream::{UpstreamCredentials, UpstreamScheme, UpstreamTarget};

/// Reading the configuration from this path consumes standard input instead.
pub const STDIN_PATH: &str = "stdin";

/// Main configuration structure for AhaDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTPDNS account credentials
    #[serde(default)]
    pub api: ApiConfig,

    /// Upstream provider address and ports
    #[serde(default)]
    pub server: ServerConfig,

    /// Inbound DNS listeners
    #[serde(default)]
    pub dns: DnsListenersConfig,

    /// Certificate material for DNS-over-TLS
    #[serde(default)]
    pub tls: TlsConfig,

    #[serde(default)]
    pub log: LoggingConfig,
}

impl Config {
    /// Load configuration from a JSON file, or from standard input when the
    /// path is `stdin`.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let contents = if path == STDIN_PATH {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
            buf
        } else {
            std::fs::read_to_string(path)
                .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?
        };

        Self::from_json(&contents)
    }

    /// Parse and validate a JSON document. Unknown fields are rejected.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Config =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.server.apply_defaults();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        join_ip_port(&self.server.address, self.server.udp_port).map_err(|_| {
            ConfigError::Validation(format!(
                "server address '{}' is not an IP address",
                self.server.address
            ))
        })?;

        if self.api.account_id.is_empty()
            || self.api.access_key_id.is_empty()
            || self.api.access_key_secret.is_empty()
        {
            return Err(ConfigError::Validation(
                "api.account_id, api.access_key_id and api.access_key_secret are required"
                    .to_string(),
            ));
        }

        if !self.dns.any_served() {
            return Err(ConfigError::Validation(
                "No DNS listener enabled (dns.udp, dns.tcp or dns.tls)".to_string(),
            ));
        }

        if self.dns.tls.enabled {
            if !self.tls.enabled {
                return Err(ConfigError::Validation(
                    "TLS options are not enabled".to_string(),
                ));
            }
            if self.tls.cert_path.is_empty() {
                return Err(ConfigError::Validation(
                    "TLS certificate path is not set".to_string(),
                ));
            }
            if self.tls.key_path.is_empty() {
                return Err(ConfigError::Validation("TLS key path is not set".to_string()));
            }
        }

        Ok(())
    }

    pub fn credentials(&self) -> UpstreamCredentials {
        self.api.credentials()
    }

    /// Resolve the upstream endpoints from the `server` and `api.extra`
    /// sections.
    pub fn upstream_target(&self) -> Result<UpstreamTarget, ConfigError> {
        let scheme = self.api.extra.method;
        let http_port = match scheme {
            UpstreamScheme::Http => self.server.http_port,
            UpstreamScheme::Https => self.server.https_port,
        };

        let http_authority = join_ip_port(&self.server.address, http_port)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        let forward_addr = if self.api.extra.enabled {
            let authority = join_ip_port(&self.server.address, self.server.udp_port)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
            let addr: SocketAddr = authority
                .parse()
                .map_err(|_| ConfigError::Validation(format!("invalid address {}", authority)))?;
            Some(addr)
        } else {
            None
        };

        Ok(UpstreamTarget {
            scheme,
            http_authority,
            forward_addr,
        })
    }
}
