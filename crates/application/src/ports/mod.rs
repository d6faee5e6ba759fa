mod httpdns_client;
mod raw_dns_forwarder;

pub use httpdns_client::HttpDnsClient;
pub use raw_dns_forwarder::RawDnsForwarder;

// Re-export for convenience
pub use aha_dns_domain::{DnsQuery, ResolutionResult};
