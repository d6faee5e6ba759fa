use crate::dns::ecs::client_subnet;
use aha_dns_application::use_cases::HandleDnsQueryUseCase;
use aha_dns_domain::{DnsQuery, RecordType};
use hickory_proto::op::{Edns, Header};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error};

/// Smallest UDP payload size advertised back to EDNS clients.
const MIN_EDNS_PAYLOAD: u16 = 512;

/// Shared by every listener; the UDP, TCP and TLS paths answer identically.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    fn questions(request: &Request) -> Vec<DnsQuery> {
        let ecs = client_subnet(request.edns());
        request
            .queries()
            .iter()
            .map(|query| {
                DnsQuery::new(
                    query.original().name().to_ascii(),
                    RecordType::from_u16(u16::from(query.query_type())),
                )
                .with_ecs(&ecs)
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let queries = Self::questions(request);
        let client_ip = request.src().ip();

        for query in &queries {
            debug!(
                domain = %query.name,
                record_type = %query.record_type,
                client = %client_ip,
                ecs = query.ecs.as_deref().unwrap_or(""),
                "DNS query received"
            );
        }

        let answer = self.use_case.execute(&queries).await;

        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        header.set_recursion_available(true);
        header.set_response_code(answer.response_code);

        let mut builder = MessageResponseBuilder::from_message_request(request);
        if let Some(request_edns) = request.edns() {
            let mut edns = Edns::new();
            edns.set_max_payload(request_edns.max_payload().max(MIN_EDNS_PAYLOAD));
            edns.set_version(0);
            builder.edns(edns);
        }

        debug!(
            answers = answer.records.len(),
            rcode = ?answer.response_code,
            "Sending response"
        );

        let response = builder.build(header, answer.records.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                let mut header = Header::response_from_request(request.header());
                header.set_response_code(hickory_proto::op::ResponseCode::ServFail);
                ResponseInfo::from(header)
            }
        }
    }
}
