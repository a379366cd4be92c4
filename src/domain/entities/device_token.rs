use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DevicePlatform {
    Ios,
    Android,
    Web,
}

impl fmt::Display for DevicePlatform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DevicePlatform::Ios => write!(f, "ios"),
            DevicePlatform::Android => write!(f, "android"),
            DevicePlatform::Web => write!(f, "web"),
        }
    }
}

/// Outbound registration of a provider-issued device token, sent on token
/// issuance and on refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceTokenRegistration {
    pub token: String,
    pub device_type: DevicePlatform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

impl DeviceTokenRegistration {
    pub fn new(token: String, device_type: DevicePlatform, device_id: Option<String>) -> Self {
        Self {
            token,
            device_type,
            device_id,
        }
    }
}
