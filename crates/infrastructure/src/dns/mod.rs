pub mod ecs;
pub mod forwarding;
pub mod httpdns;
pub mod server;
pub mod transport;

pub use ecs::client_subnet;
pub use forwarding::DnsForwarder;
pub use httpdns::{ReqwestHttpDnsClient, RequestSigner};
pub use server::DnsServerHandler;
