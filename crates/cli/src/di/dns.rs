use aha_dns_application::use_cases::HandleDnsQueryUseCase;
use aha_dns_domain::Config;
use aha_dns_infrastructure::dns::{DnsForwarder, DnsServerHandler, ReqwestHttpDnsClient};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let target = config.upstream_target()?;
        info!(endpoint = %target.resolve_endpoint(), "Using HTTPDNS upstream");

        let client = Arc::new(ReqwestHttpDnsClient::new(config.credentials(), &target));
        let mut use_case = HandleDnsQueryUseCase::new(client);

        if let Some(forward_addr) = target.forward_addr {
            info!(server = %forward_addr, "Raw DNS forwarding enabled");
            use_case = use_case.with_forwarder(Arc::new(DnsForwarder::udp(forward_addr)));
        }

        Ok(Self {
            handler: DnsServerHandler::new(Arc::new(use_case)),
        })
    }
}
