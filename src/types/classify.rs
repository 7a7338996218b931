use serde::{Deserialize, Serialize};

use super::connection::ConnectionFormData;

/// Payload sent to the classification service.
///
/// Every field is transmitted even when empty; the service treats blanks
/// as "not provided".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifyRequest {
    pub ip: String,
    pub netmask: String,
    #[serde(rename = "type")]
    pub address_type: String,
    pub ranges: String,
    pub available: String,
    pub network: String,
    pub broadcast: String,
}

impl From<&ConnectionFormData> for ClassifyRequest {
    fn from(form: &ConnectionFormData) -> Self {
        Self {
            ip: form.ip.clone(),
            netmask: form.netmask.clone(),
            address_type: form.address_type.clone(),
            ranges: form.range.clone(),
            // the receiver parses this as a number; strip thousands separators
            available: form.available_ips.replace(',', ""),
            network: form.network_address.clone(),
            broadcast: form.broadcast_address.clone(),
        }
    }
}

/// Successful classification: the derived access code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessGrant {
    pub code: String,
}

/// Body of a non-2xx answer from the classification service.
///
/// The service sends either an `errors` array (semantic rejection) or a
/// `message` string; both are optional so any JSON object deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifyRejection {
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub message: Option<String>,
}
