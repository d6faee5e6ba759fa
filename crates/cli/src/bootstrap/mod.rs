mod config;
mod logging;
mod tls;

pub use config::{enter_directory, load_config, warn_unserved_listeners};
pub use logging::init_logging;
pub use tls::load_tls_config;
