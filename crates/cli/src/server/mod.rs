pub mod dns;

pub use dns::{start_dns_listeners, wait_for_shutdown_signal};
