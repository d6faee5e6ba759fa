pub mod dns_server_mock;
pub mod http_upstream_mock;

pub use dns_server_mock::MockDnsServer;
pub use http_upstream_mock::{credentials, MockHttpDnsUpstream};
