use hickory_proto::op::Edns;
use hickory_proto::rr::rdata::opt::{EdnsCode, EdnsOption};

/// Renders the EDNS client-subnet option of an inbound message as
/// `address/source-prefix`. Returns an empty string when the message has no
/// OPT record or the OPT record carries no subnet option.
pub fn client_subnet(edns: Option<&Edns>) -> String {
    edns.and_then(|edns| match edns.option(EdnsCode::Subnet) {
        Some(EdnsOption::Subnet(subnet)) => {
            Some(format!("{}/{}", subnet.addr(), subnet.source_prefix()))
        }
        _ => None,
    })
    .unwrap_or_default()
}
