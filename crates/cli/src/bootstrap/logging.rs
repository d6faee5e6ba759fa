use aha_dns_domain::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level; a disabled log section installs nothing. Fails when a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(enabled: bool) -> LoggingConfig {
        LoggingConfig {
            enabled,
            level: "debug".to_string(),
        }
    }

    #[test]
    fn test_disabled_installs_nothing() {
        assert!(init_logging(&logging(false)).is_ok());
    }

    #[test]
    fn test_second_install_is_reported() {
        let _ = init_logging(&logging(true));
        assert!(init_logging(&logging(true)).is_err());
    }
}
