#![allow(dead_code)]
use aha_dns_domain::{UpstreamCredentials, UpstreamScheme, UpstreamTarget};
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Clone)]
struct UpstreamState {
    status: StatusCode,
    body: Arc<String>,
    seen: Arc<Mutex<Vec<String>>>,
}

/// HTTPDNS `/resolve` endpoint answering every request with a fixed body.
pub struct MockHttpDnsUpstream {
    addr: SocketAddr,
    seen: Arc<Mutex<Vec<String>>>,
    task: JoinHandle<()>,
}

impl MockHttpDnsUpstream {
    pub async fn start(body: &str) -> Self {
        Self::start_with_status(StatusCode::OK, body).await
    }

    pub async fn start_with_status(status: StatusCode, body: &str) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            status,
            body: Arc::new(body.to_string()),
            seen: seen.clone(),
        };

        let app = Router::new()
            .route("/resolve", get(resolve))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, seen, task }
    }

    pub fn target(&self) -> UpstreamTarget {
        UpstreamTarget {
            scheme: UpstreamScheme::Http,
            http_authority: self.addr.to_string(),
            forward_addr: None,
        }
    }

    /// Raw query strings of every request received so far.
    pub fn seen_queries(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Drop for MockHttpDnsUpstream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn credentials() -> UpstreamCredentials {
    UpstreamCredentials {
        account_id: "139450".to_string(),
        access_key_id: "ak-1".to_string(),
        access_key_secret: "secret".to_string(),
    }
}

async fn resolve(
    State(state): State<UpstreamState>,
    RawQuery(query): RawQuery,
) -> (StatusCode, String) {
    state.seen.lock().unwrap().push(query.unwrap_or_default());
    (state.status, state.body.as_ref().clone())
}
