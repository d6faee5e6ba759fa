use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// HTTPDNS account credentials. Read-only for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamCredentials {
    pub account_id: String,
    pub access_key_id: String,
    pub access_key_secret: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamScheme {
    #[default]
    Http,
    Https,
}

impl UpstreamScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// Where the gateway sends its upstream traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    pub scheme: UpstreamScheme,

    /// `host:port` authority of the JSON API, IPv6 bracketed.
    pub http_authority: String,

    /// Plain recursive resolver for the raw-forward path, when enabled.
    pub forward_addr: Option<SocketAddr>,
}

impl UpstreamTarget {
    pub fn resolve_endpoint(&self) -> String {
        format!("{}://{}/resolve", self.scheme.as_str(), self.http_authority)
    }
}
