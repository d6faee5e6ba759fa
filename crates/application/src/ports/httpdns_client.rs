use async_trait::async_trait;
use aha_dns_domain::{DnsQuery, DomainError, ResolutionResult};

/// Client for the HTTPDNS JSON resolution API.
#[async_trait]
pub trait HttpDnsClient: Send + Sync {
    /// Sends one signed `/resolve` request and decodes the JSON body.
    ///
    /// A decoded body with a non-zero `Status` is returned as `Ok`; the
    /// caller decides what a failed status means.
    async fn resolve(&self, query: &DnsQuery) -> Result<ResolutionResult, DomainError>;
}
