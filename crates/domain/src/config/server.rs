use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_ADDRESS: &str = "223.5.5.5";
pub const DEFAULT_UDP_PORT: u16 = 53;
pub const DEFAULT_TCP_PORT: u16 = 53;
pub const DEFAULT_TLS_PORT: u16 = 853;
pub const DEFAULT_HTTP_PORT: u16 = 80;
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// Upstream provider endpoint. Accepts either the full object or, as older
/// configuration files do, a bare address string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "ServerConfigRepr")]
pub struct ServerConfig {
    pub address: String,

    pub udp_port: u16,

    pub tcp_port: u16,

    pub tls_port: u16,

    pub http_port: u16,

    pub https_port: u16,
}

impl ServerConfig {
    /// Replaces empty address and zero ports with the provider defaults.
    pub fn apply_defaults(&mut self) {
        if self.address.is_empty() {
            self.address = DEFAULT_SERVER_ADDRESS.to_string();
        }
        if self.udp_port == 0 {
            self.udp_port = DEFAULT_UDP_PORT;
        }
        if self.tcp_port == 0 {
            self.tcp_port = DEFAULT_TCP_PORT;
        }
        if self.tls_port == 0 {
            self.tls_port = DEFAULT_TLS_PORT;
        }
        if self.http_port == 0 {
            self.http_port = DEFAULT_HTTP_PORT;
        }
        if self.https_port == 0 {
            self.https_port = DEFAULT_HTTPS_PORT;
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_SERVER_ADDRESS.to_string(),
            udp_port: DEFAULT_UDP_PORT,
            tcp_port: DEFAULT_TCP_PORT,
            tls_port: DEFAULT_TLS_PORT,
            http_port: DEFAULT_HTTP_PORT,
            https_port: DEFAULT_HTTPS_PORT,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ServerConfigRepr {
    Address(String),
    Full(ServerFields),
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields, default)]
struct ServerFields {
    address: String,
    udp_port: u16,
    tcp_port: u16,
    tls_port: u16,
    http_port: u16,
    https_port: u16,
}

impl From<ServerConfigRepr> for ServerConfig {
    fn from(repr: ServerConfigRepr) -> Self {
        let fields = match repr {
            ServerConfigRepr::Address(address) => ServerFields {
                address,
                ..ServerFields::default()
            },
            ServerConfigRepr::Full(fields) => fields,
        };

        let mut config = ServerConfig {
            address: fields.address,
            udp_port: fields.udp_port,
            tcp_port: fields.tcp_port,
            tls_port: fields.tls_port,
            http_port: fields.http_port,
            https_port: fields.https_port,
        };
        config.apply_defaults();
        config
    }
}
