//! JSON entity returned by the HTTPDNS `/resolve` endpoint.
//!
//! ```text
//! {"Status":0,"TC":false,"RD":true,"RA":true,"AD":false,"CD":false,
//!  "Question":{"name":"example.com.","type":1},
//!  "Answer":[{"name":"example.com.","TTL":300,"type":1,"data":"93.184.216.34"}]}
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// One record of the `Answer`, `Authority` or `Additional` arrays.
///
/// `data` is the presentation form of the RDATA; its grammar depends on
/// `record_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnswerEntry {
    pub name: String,

    #[serde(rename = "TTL")]
    pub ttl: u32,

    #[serde(rename = "type")]
    pub record_type: u16,

    pub data: String,
}

impl AnswerEntry {
    pub fn new(name: impl Into<String>, ttl: u32, record_type: u16, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl,
            record_type,
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuestionEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolutionResult {
    #[serde(rename = "Status")]
    pub status: i32,

    #[serde(rename = "TC")]
    pub truncated: bool,

    #[serde(rename = "RD")]
    pub recursion_desired: bool,

    #[serde(rename = "RA")]
    pub recursion_available: bool,

    #[serde(rename = "AD")]
    pub authentic_data: bool,

    #[serde(rename = "CD")]
    pub checking_disabled: bool,

    #[serde(rename = "Question")]
    pub question: Option<QuestionEntry>,

    #[serde(rename = "Answer", deserialize_with = "nullable_vec")]
    pub answer: Vec<AnswerEntry>,

    #[serde(rename = "Authority", deserialize_with = "nullable_vec")]
    pub authority: Vec<AnswerEntry>,

    #[serde(rename = "Additional", deserialize_with = "nullable_vec")]
    pub additional: Vec<AnswerEntry>,

    #[serde(rename = "edns_client_subnet", skip_serializing_if = "Option::is_none")]
    pub ecs: Option<String>,
}

impl ResolutionResult {
    pub fn is_success(&self) -> bool {
        self.status == 0
    }
}

/// `"Answer": null` is as good as a missing array.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
