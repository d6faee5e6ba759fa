use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::{DnsTransport, UdpTransport};
use aha_dns_application::ports::RawDnsForwarder;
use aha_dns_domain::{DnsQuery, DomainError};
use async_trait::async_trait;
use hickory_proto::rr::Record;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

const DEFAULT_FORWARD_TIMEOUT: Duration = Duration::from_secs(5);

/// Plain DNS exchange with a recursive resolver for the types the JSON API
/// does not serve.
pub struct DnsForwarder {
    transport: Box<dyn DnsTransport>,
    timeout: Duration,
}

impl DnsForwarder {
    pub fn new(transport: Box<dyn DnsTransport>) -> Self {
        Self {
            transport,
            timeout: DEFAULT_FORWARD_TIMEOUT,
        }
    }

    pub fn udp(server_addr: SocketAddr) -> Self {
        Self::new(Box::new(UdpTransport::new(server_addr)))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl RawDnsForwarder for DnsForwarder {
    async fn forward(&self, query: &DnsQuery) -> Result<Vec<Record>, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_query_with_id(&query.name, query.record_type)?;

        let response = self.transport.send(&request_bytes, self.timeout).await?;

        debug!(
            domain = %query.name,
            record_type = %query.record_type,
            protocol = response.protocol_used,
            "Forwarded query answered"
        );

        ResponseParser::parse_answers(&response.bytes, id)
    }
}
