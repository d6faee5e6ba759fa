use crate::bootstrap::load_tls_config;
use aha_dns_domain::config::listen::{DEFAULT_DNS_PORT, DEFAULT_DOT_PORT};
use aha_dns_domain::config::ListenConfig;
use aha_dns_domain::Config;
use aha_dns_infrastructure::dns::DnsServerHandler;
use anyhow::Context;
use hickory_server::ServerFuture;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::info;

const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);
const TLS_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    Udp,
    Tcp,
    Tls,
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Udp => "udp",
            Self::Tcp => "tcp",
            Self::Tls => "tls",
        })
    }
}

pub type ListenerOutcome = (ListenerKind, anyhow::Result<()>);

fn listen_addr(kind: ListenerKind, listen: &ListenConfig, default_port: u16) -> anyhow::Result<SocketAddr> {
    listen
        .socket_addr(default_port)
        .with_context(|| format!("Invalid {} listen address", kind))
}

/// Binds every enabled listener, then serves each from its own task until
/// `shutdown` fires. Bind and certificate failures abort startup.
pub async fn start_dns_listeners(
    config: &Config,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<JoinSet<ListenerOutcome>> {
    let mut servers = Vec::new();

    if config.dns.udp.enabled {
        let addr = listen_addr(ListenerKind::Udp, &config.dns.udp, DEFAULT_DNS_PORT)?;
        let socket = UdpSocket::bind(addr)
            .await
            .with_context(|| format!("Failed to start UDP server on {}", addr))?;
        let mut server = ServerFuture::new(handler.clone());
        server.register_socket(socket);
        info!(bind_address = %addr, "UDP DNS server listening");
        servers.push((ListenerKind::Udp, server));
    }

    if config.dns.tcp.enabled {
        let addr = listen_addr(ListenerKind::Tcp, &config.dns.tcp, DEFAULT_DNS_PORT)?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to start TCP server on {}", addr))?;
        let mut server = ServerFuture::new(handler.clone());
        server.register_listener(listener, TCP_IDLE_TIMEOUT);
        info!(bind_address = %addr, "TCP DNS server listening");
        servers.push((ListenerKind::Tcp, server));
    }

    if config.dns.tls.enabled {
        let addr = listen_addr(ListenerKind::Tls, &config.dns.tls, DEFAULT_DOT_PORT)?;
        let tls_config = load_tls_config(&config.tls.cert_path, &config.tls.key_path)
            .context("Failed to start TLS server")?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to start TLS server on {}", addr))?;
        let mut server = ServerFuture::new(handler.clone());
        server
            .register_tls_listener_with_tls_config(listener, TLS_HANDSHAKE_TIMEOUT, tls_config)
            .with_context(|| format!("Failed to start TLS server on {}", addr))?;
        info!(bind_address = %addr, "DNS-over-TLS server listening");
        servers.push((ListenerKind::Tls, server));
    }

    let mut join_set = JoinSet::new();
    for (kind, server) in servers {
        let token = shutdown.clone();
        join_set.spawn(async move { (kind, serve(kind, server, token).await) });
    }

    Ok(join_set)
}

async fn serve(
    kind: ListenerKind,
    mut server: ServerFuture<DnsServerHandler>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let finished = tokio::select! {
        result = server.block_until_done() => Some(result),
        _ = shutdown.cancelled() => None,
    };

    match finished {
        Some(result) => {
            result.with_context(|| format!("{} listener failed", kind))?;
            anyhow::bail!("{} listener stopped unexpectedly", kind)
        }
        None => {
            info!(listener = %kind, "Shutting down DNS listener");
            server
                .shutdown_gracefully()
                .await
                .with_context(|| format!("{} listener did not shut down cleanly", kind))
        }
    }
}

/// Resolves on SIGINT or SIGTERM.
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = terminate.recv() => Ok(()),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}
