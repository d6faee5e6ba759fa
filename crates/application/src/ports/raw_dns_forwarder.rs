use async_trait::async_trait;
use aha_dns_domain::{DnsQuery, DomainError};
use hickory_proto::rr::Record;

/// Plain DNS exchange with a recursive resolver, used for the record types
/// the JSON API does not serve.
#[async_trait]
pub trait RawDnsForwarder: Send + Sync {
    /// Returns the answer section of a NOERROR response. Any other response
    /// code is an error carrying the code's name.
    async fn forward(&self, query: &DnsQuery) -> Result<Vec<Record>, DomainError>;
}
