pub mod dns;

pub use dns::{DnsAnswer, HandleDnsQueryUseCase};
