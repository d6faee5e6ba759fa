use crate::upstream::{UpstreamCredentials, UpstreamScheme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    #[serde(default)]
    pub account_id: String,

    #[serde(default)]
    pub access_key_id: String,

    #[serde(default)]
    pub access_key_secret: String,

    #[serde(default)]
    pub extra: ExtraConfig,
}

impl ApiConfig {
    pub fn credentials(&self) -> UpstreamCredentials {
        UpstreamCredentials {
            account_id: self.account_id.clone(),
            access_key_id: self.access_key_id.clone(),
            access_key_secret: self.access_key_secret.clone(),
        }
    }
}

/// `enabled` turns on plain-DNS forwarding for the types the JSON API does
/// not serve; `method` picks the scheme used for the JSON API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub method: UpstreamScheme,
}
