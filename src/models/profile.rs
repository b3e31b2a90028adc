use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role/skills profile, one per user, stored in the `profiles` array.
///
/// `role`, `skills` and the optional fields are free-form JSON: the frontend decides
/// their shape and the backend only passes them through.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub role: Value,
    pub skills: Value,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mode: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub availability: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bio: Option<Value>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub user_id: Option<Value>,
    pub role: Option<Value>,
    pub skills: Option<Value>,
    pub category: Option<Value>,
    pub rate: Option<Value>,
    pub mode: Option<Value>,
    pub availability: Option<Value>,
    pub bio: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
