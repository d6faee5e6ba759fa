use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Failed to build upstream request: {0}")]
    SignatureBuild(String),

    #[error("Upstream HTTP request failed: {0}")]
    UpstreamHttp(String),

    #[error("Upstream returned non-success status {0}")]
    UpstreamStatus(i32),

    #[error("Failed to decode upstream response: {0}")]
    UpstreamDecode(String),

    #[error("Query failed: {0}")]
    RawForward(String),

    #[error("Malformed {record_type} answer data {data:?}: {reason}")]
    MalformedAnswerData {
        record_type: u16,
        data: String,
        reason: String,
    },

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },
}
