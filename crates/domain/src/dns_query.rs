use super::RecordType;
use std::sync::Arc;

/// One question of an inbound message, ready to be resolved upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    /// Fully qualified presentation name, e.g. `example.com.`
    pub name: Arc<str>,
    pub record_type: RecordType,
    /// EDNS client subnet hint rendered as `ip/prefix`.
    pub ecs: Option<Arc<str>>,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            ecs: None,
        }
    }

    /// Attaches the client subnet hint. An empty string means no hint.
    pub fn with_ecs(mut self, ecs: impl AsRef<str>) -> Self {
        let ecs = ecs.as_ref();
        self.ecs = if ecs.is_empty() {
            None
        } else {
            Some(Arc::from(ecs))
        };
        self
    }
}
