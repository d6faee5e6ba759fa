//! AhaDNS Infrastructure Layer
//!
//! Upstream clients for the HTTPDNS JSON API and the plain recursive
//! resolver, plus the hickory request handler that serves inbound queries.
pub mod dns;
