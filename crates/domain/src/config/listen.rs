use super::address::join_ip_port;
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_DNS_PORT: u16 = 53;
pub const DEFAULT_DOT_PORT: u16 = 853;

/// Inbound listeners. `http` and `https` are parsed for compatibility with
/// existing configuration files but are not served.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DnsListenersConfig {
    #[serde(default)]
    pub udp: ListenConfig,

    #[serde(default)]
    pub tcp: ListenConfig,

    #[serde(default)]
    pub tls: ListenConfig,

    #[serde(default)]
    pub http: ListenConfig,

    #[serde(default)]
    pub https: ListenConfig,
}

impl DnsListenersConfig {
    pub fn any_served(&self) -> bool {
        self.udp.enabled || self.tcp.enabled || self.tls.enabled
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ListenConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub listen: String,

    #[serde(default)]
    pub listen_port: u16,
}

impl ListenConfig {
    /// `host:port` string for this listener, with `default_port` standing in
    /// for an unset port.
    pub fn authority(&self, default_port: u16) -> Result<String, DomainError> {
        let host = if self.listen.is_empty() {
            DEFAULT_LISTEN_ADDRESS
        } else {
            self.listen.as_str()
        };
        let port = if self.listen_port == 0 {
            default_port
        } else {
            self.listen_port
        };
        join_ip_port(host, port)
    }

    pub fn socket_addr(&self, default_port: u16) -> Result<SocketAddr, DomainError> {
        let authority = self.authority(default_port)?;
        authority
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(authority))
    }
}
