pub mod address;
pub mod api;
pub mod errors;
pub mod listen;
pub mod logging;
pub mod root;
pub mod server;
pub mod tls;

pub use address::join_ip_port;
pub use api::{ApiConfig, ExtraConfig};
pub use errors::ConfigError;
pub use listen::{DnsListenersConfig, ListenConfig};
pub use logging::LoggingConfig;
pub use root::Config;
pub use server::ServerConfig;
pub use tls::TlsConfig;
