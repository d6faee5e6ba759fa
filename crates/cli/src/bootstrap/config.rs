use aha_dns_domain::Config;
use anyhow::Context;
use std::path::Path;
use tracing::warn;

pub fn load_config(path: &str) -> anyhow::Result<Config> {
    Config::load(path).with_context(|| format!("Failed to load configuration from {}", path))
}

/// Creates `dir` when missing and makes it the working directory, so that
/// relative certificate paths resolve against it.
pub fn enter_directory(dir: &Path) -> anyhow::Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create working directory {}", dir.display()))?;
    }
    std::env::set_current_dir(dir)
        .with_context(|| format!("Failed to enter working directory {}", dir.display()))
}

pub fn warn_unserved_listeners(config: &Config) {
    if config.dns.http.enabled {
        warn!("dns.http is enabled but DNS-over-HTTP listeners are not served");
    }
    if config.dns.https.enabled {
        warn!("dns.https is enabled but DNS-over-HTTPS listeners are not served");
    }
}
