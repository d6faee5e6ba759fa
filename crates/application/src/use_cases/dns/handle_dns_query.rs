use crate::ports::{HttpDnsClient, RawDnsForwarder};
use crate::services::{route_for, AnswerTranslator, ResolutionRoute};
use aha_dns_domain::{DnsQuery, DomainError};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, instrument};

/// Records and response code for one inbound message.
#[derive(Debug, Clone)]
pub struct DnsAnswer {
    pub records: Vec<Record>,
    pub response_code: ResponseCode,
}

pub struct HandleDnsQueryUseCase {
    http_client: Arc<dyn HttpDnsClient>,
    forwarder: Option<Arc<dyn RawDnsForwarder>>,
}

impl HandleDnsQueryUseCase {
    pub fn new(http_client: Arc<dyn HttpDnsClient>) -> Self {
        Self {
            http_client,
            forwarder: None,
        }
    }

    pub fn with_forwarder(mut self, forwarder: Arc<dyn RawDnsForwarder>) -> Self {
        self.forwarder = Some(forwarder);
        self
    }

    /// Resolve every question of a message in order and concatenate the
    /// records. Any failed question turns the whole reply into SERVFAIL;
    /// records from the questions that did succeed are still returned.
    pub async fn execute(&self, queries: &[DnsQuery]) -> DnsAnswer {
        let start = Instant::now();
        let mut records = Vec::new();
        let mut response_code = ResponseCode::NoError;

        for query in queries {
            match self.resolve_question(query).await {
                Ok(answers) => records.extend(answers),
                Err(e) => {
                    error!(
                        domain = %query.name,
                        record_type = %query.record_type,
                        error = %e,
                        "Query resolution failed"
                    );
                    response_code = ResponseCode::ServFail;
                }
            }
        }

        debug!(
            questions = queries.len(),
            answers = records.len(),
            rcode = ?response_code,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Message resolved"
        );

        DnsAnswer {
            records,
            response_code,
        }
    }

    #[instrument(skip(self), fields(domain = %query.name, record_type = %query.record_type))]
    pub async fn resolve_question(&self, query: &DnsQuery) -> Result<Vec<Record>, DomainError> {
        match route_for(query.record_type) {
            ResolutionRoute::HttpDns => {
                let result = self.http_client.resolve(query).await?;
                if !result.is_success() {
                    return Err(DomainError::UpstreamStatus(result.status));
                }
                Ok(AnswerTranslator::translate_all(&result.answer))
            }
            ResolutionRoute::RawForward => match &self.forwarder {
                Some(forwarder) => forwarder.forward(query).await,
                None => {
                    debug!("Raw forwarding disabled, answering with no records");
                    Ok(Vec::new())
                }
            },
            ResolutionRoute::Unsupported => {
                debug!("Unsupported record type, answering with no records");
                Ok(Vec::new())
            }
        }
    }
}
