use aha_dns_domain::RecordType;

/// How a question of a given type gets resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionRoute {
    /// Signed request to the HTTPDNS JSON API.
    HttpDns,
    /// Plain DNS exchange with the configured recursive resolver.
    RawForward,
    /// Answered with no records.
    Unsupported,
}

const ROUTES: &[(RecordType, ResolutionRoute)] = &[
    (RecordType::A, ResolutionRoute::HttpDns),
    (RecordType::AAAA, ResolutionRoute::HttpDns),
    (RecordType::CNAME, ResolutionRoute::HttpDns),
    (RecordType::NS, ResolutionRoute::HttpDns),
    (RecordType::TXT, ResolutionRoute::HttpDns),
    (RecordType::MX, ResolutionRoute::HttpDns),
    (RecordType::CAA, ResolutionRoute::HttpDns),
    (RecordType::SOA, ResolutionRoute::HttpDns),
    (RecordType::PTR, ResolutionRoute::RawForward),
];

pub fn route_for(record_type: RecordType) -> ResolutionRoute {
    ROUTES
        .iter()
        .find(|(rt, _)| *rt == record_type)
        .map(|(_, route)| *route)
        .unwrap_or(ResolutionRoute::Unsupported)
}
