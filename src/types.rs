use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One record of the objects resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiObject {
    /// Server-assigned identifier; absent on payloads the client submits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Free-form attribute map. The public deployment stores device specs here.
    #[serde(default)]
    pub data: Option<JsonValue>,
}

/// Device attribute block used by the test-data generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceData {
    pub year: i32,
    pub price: f64,
    #[serde(rename = "CPU model")]
    pub cpu_model: String,
    #[serde(rename = "Hard disk size")]
    pub hard_disk_size: String,
}

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

/// Token payload returned by authentication and refresh endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Seconds until the access token expires.
    #[serde(default)]
    pub expires_in: Option<u64>,
}
