#![allow(dead_code)]
use aha_dns_application::ports::{HttpDnsClient, RawDnsForwarder};
use aha_dns_domain::{AnswerEntry, DnsQuery, DomainError, ResolutionResult};
use async_trait::async_trait;
use hickory_proto::rr::Record;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub struct MockHttpDnsClient {
    responses: Arc<RwLock<HashMap<String, ResolutionResult>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    seen: Arc<Mutex<Vec<DnsQuery>>>,
}

impl MockHttpDnsClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            errors: Arc::new(RwLock::new(HashMap::new())),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn set_response(&self, name: &str, result: ResolutionResult) {
        self.responses
            .write()
            .await
            .insert(name.to_string(), result);
    }

    pub async fn set_answers(&self, name: &str, answers: Vec<AnswerEntry>) {
        self.set_response(
            name,
            ResolutionResult {
                answer: answers,
                ..ResolutionResult::default()
            },
        )
        .await;
    }

    pub async fn set_status(&self, name: &str, status: i32) {
        self.set_response(
            name,
            ResolutionResult {
                status,
                ..ResolutionResult::default()
            },
        )
        .await;
    }

    pub async fn set_error(&self, name: &str, error: DomainError) {
        self.errors.write().await.insert(name.to_string(), error);
    }

    pub fn seen_queries(&self) -> Vec<DnsQuery> {
        self.seen.lock().unwrap().clone()
    }
}

impl Default for MockHttpDnsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpDnsClient for MockHttpDnsClient {
    async fn resolve(&self, query: &DnsQuery) -> Result<ResolutionResult, DomainError> {
        self.seen.lock().unwrap().push(query.clone());

        if let Some(err) = self.errors.read().await.get(query.name.as_ref()).cloned() {
            return Err(err);
        }

        self.responses
            .read()
            .await
            .get(query.name.as_ref())
            .cloned()
            .ok_or_else(|| DomainError::UpstreamHttp(format!("No mock response for {}", query.name)))
    }
}

pub struct MockRawForwarder {
    records: Vec<Record>,
    error: Option<DomainError>,
    calls: Mutex<usize>,
}

impl MockRawForwarder {
    pub fn answering(records: Vec<Record>) -> Self {
        Self {
            records,
            error: None,
            calls: Mutex::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            records: Vec::new(),
            error: Some(error),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl RawDnsForwarder for MockRawForwarder {
    async fn forward(&self, _query: &DnsQuery) -> Result<Vec<Record>, DomainError> {
        *self.calls.lock().unwrap() += 1;
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.records.clone()),
        }
    }
}
