//! AhaDNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod resolution;
pub mod upstream;

pub use config::{join_ip_port, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use resolution::{AnswerEntry, QuestionEntry, ResolutionResult};
pub use upstream::{UpstreamCredentials, UpstreamScheme, UpstreamTarget};
