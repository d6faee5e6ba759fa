use crate::DomainError;
use std::net::IpAddr;

/// Joins an IP literal and a port into a `host:port` authority.
///
/// IPv6 addresses are bracketed (`[::1]:53`), IPv4 addresses are not.
/// Host names are rejected.
pub fn join_ip_port(ip: &str, port: u16) -> Result<String, DomainError> {
    let trimmed = ip.trim_start_matches('[').trim_end_matches(']');
    let parsed: IpAddr = trimmed
        .parse()
        .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;

    Ok(match parsed {
        IpAddr::V4(v4) => format!("{}:{}", v4, port),
        IpAddr::V6(v6) => format!("[{}]:{}", v6, port),
    })
}
