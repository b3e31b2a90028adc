use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registered account, as persisted in the `users` array of the store
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,  // PRIMARY IDENTIFIER - handed back to the client as userId
    pub name: Value,
    pub roll: Value,  // institutional id, kept as sent (text or number)
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user returned by signup and login (never carries the hash)
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub message: String,
    pub user_id: String,
    pub name: Value,
    pub email: String,
}

impl AccountResponse {
    pub fn new(message: &str, user: &User) -> Self {
        Self {
            message: message.to_string(),
            user_id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// `name` and `roll` are free-form; the credentials must be JSON strings
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    pub name: Option<Value>,
    pub roll: Option<Value>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}
