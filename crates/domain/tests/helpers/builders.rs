#![allow(dead_code)]
use serde_json::{json, Value};

/// Builds configuration documents the way operators write them, starting
/// from a minimal valid file with a UDP listener.
pub struct ConfigJsonBuilder {
    doc: Value,
}

impl ConfigJsonBuilder {
    pub fn new() -> Self {
        Self {
            doc: json!({
                "api": {
                    "account_id": "100000",
                    "access_key_id": "ak-test",
                    "access_key_secret": "sk-test"
                },
                "dns": {
                    "udp": { "enabled": true, "listen": "127.0.0.1", "listen_port": 5353 }
                }
            }),
        }
    }

    /// Sets the value at a `/section/field` path, creating objects on the way.
    pub fn set(mut self, pointer: &str, value: Value) -> Self {
        let mut parts = pointer.trim_start_matches('/').split('/').peekable();
        let mut current = &mut self.doc;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                current[part] = value;
                break;
            }
            if current.get(part).is_none() {
                current[part] = json!({});
            }
            current = &mut current[part];
        }
        self
    }

    pub fn remove(mut self, section: &str) -> Self {
        if let Some(obj) = self.doc.as_object_mut() {
            obj.remove(section);
        }
        self
    }

    pub fn build(self) -> String {
        self.doc.to_string()
    }
}
