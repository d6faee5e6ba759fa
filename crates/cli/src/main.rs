use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "aha-dns")]
#[command(version)]
#[command(about = "AhaDNS - DNS gateway for the Alibaba Cloud public HTTPDNS API")]
struct Cli {
    /// Configuration file path (`stdin` reads it from standard input)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: String,

    /// Working directory, created if missing
    #[arg(short = 'D', long, value_name = "DIR")]
    directory: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(&cli.config)?;
    if let Some(dir) = &cli.directory {
        bootstrap::enter_directory(dir)?;
    }

    bootstrap::init_logging(&config.log)?;

    info!("Starting AhaDNS v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::warn_unserved_listeners(&config);

    let dns_services = di::DnsServices::new(&config)?;

    let shutdown = CancellationToken::new();
    let mut listeners =
        server::start_dns_listeners(&config, dns_services.handler, shutdown.clone()).await?;

    info!(listeners = listeners.len(), "Application started");

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match server::wait_for_shutdown_signal().await {
            Ok(()) => {
                info!("Shutdown signal received");
                signal_token.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for shutdown signals"),
        }
    });

    while let Some(joined) = listeners.join_next().await {
        match joined {
            Ok((kind, Ok(()))) => info!(listener = %kind, "DNS listener stopped"),
            Ok((kind, Err(e))) => error!(listener = %kind, error = %e, "DNS listener failed"),
            Err(e) => error!(error = %e, "DNS listener task aborted"),
        }
    }

    if !shutdown.is_cancelled() {
        anyhow::bail!("No DNS listener left running");
    }

    info!("Server shutdown complete");
    Ok(())
}
