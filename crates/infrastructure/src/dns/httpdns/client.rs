use super::signer::RequestSigner;
use aha_dns_application::ports::HttpDnsClient;
use aha_dns_domain::{DnsQuery, DomainError, ResolutionResult, UpstreamCredentials, UpstreamTarget};
use async_trait::async_trait;
use std::sync::LazyLock;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Shared client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// HTTPDNS JSON API client.
pub struct ReqwestHttpDnsClient {
    signer: RequestSigner,
}

impl ReqwestHttpDnsClient {
    pub fn new(credentials: UpstreamCredentials, target: &UpstreamTarget) -> Self {
        Self {
            signer: RequestSigner::new(credentials, target),
        }
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[async_trait]
impl HttpDnsClient for ReqwestHttpDnsClient {
    async fn resolve(&self, query: &DnsQuery) -> Result<ResolutionResult, DomainError> {
        let url = self.signer.signed_url(query, unix_timestamp())?;

        let response = SHARED_CLIENT
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::UpstreamHttp(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamHttp(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::UpstreamHttp(e.to_string()))?;

        let result: ResolutionResult = serde_json::from_slice(&body)
            .map_err(|e| DomainError::UpstreamDecode(e.to_string()))?;

        debug!(
            domain = %query.name,
            record_type = %query.record_type,
            status = result.status,
            answers = result.answer.len(),
            "HTTPDNS response received"
        );

        Ok(result)
    }
}
