//! Signed `/resolve` URLs for the HTTPDNS JSON API.
//!
//! ```text
//! GET {scheme}://{server}/resolve?name=example.com.&type=A&uid={account_id}
//!     &ak={access_key_id}&key={sha256 hex}&ts={unix seconds}
//!     [&edns_client_subnet=203.0.113.0/24]
//! ```

use aha_dns_domain::{DnsQuery, DomainError, UpstreamCredentials, UpstreamTarget};
use reqwest::Url;
use sha2::{Digest, Sha256};

pub struct RequestSigner {
    credentials: UpstreamCredentials,
    endpoint: String,
}

impl RequestSigner {
    pub fn new(credentials: UpstreamCredentials, target: &UpstreamTarget) -> Self {
        Self {
            credentials,
            endpoint: target.resolve_endpoint(),
        }
    }

    /// Hex-encoded SHA-256 of
    /// `account_id || access_key_secret || timestamp || name || access_key_id`.
    pub fn signature(&self, timestamp: &str, name: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.credentials.account_id.as_bytes());
        hasher.update(self.credentials.access_key_secret.as_bytes());
        hasher.update(timestamp.as_bytes());
        hasher.update(name.as_bytes());
        hasher.update(self.credentials.access_key_id.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn signed_url(&self, query: &DnsQuery, timestamp: u64) -> Result<Url, DomainError> {
        let ts = timestamp.to_string();
        let key = self.signature(&ts, &query.name);

        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| DomainError::SignatureBuild(format!("{}: {}", self.endpoint, e)))?;
        url.query_pairs_mut()
            .append_pair("name", &query.name)
            .append_pair("type", &query.record_type.to_string())
            .append_pair("uid", &self.credentials.account_id)
            .append_pair("ak", &self.credentials.access_key_id)
            .append_pair("key", &key)
            .append_pair("ts", &ts);

        // The subnet keeps its '/' literal; its alphabet is hex digits, '.', ':' and '/'.
        if let Some(ecs) = &query.ecs {
            if !ecs.chars().all(|c| c.is_ascii_hexdigit() || matches!(c, '.' | ':' | '/')) {
                return Err(DomainError::SignatureBuild(format!(
                    "invalid client subnet: {}",
                    ecs
                )));
            }
            let pairs = format!(
                "{}&edns_client_subnet={}",
                url.query().unwrap_or_default(),
                ecs
            );
            url.set_query(Some(&pairs));
        }

        Ok(url)
    }
}
