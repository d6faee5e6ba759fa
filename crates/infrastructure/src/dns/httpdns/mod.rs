pub mod client;
pub mod signer;

pub use client::ReqwestHttpDnsClient;
pub use signer::RequestSigner;
