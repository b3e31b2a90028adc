use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;

/// Failures of the storage backend
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Store I/O error: {}", e),
            StoreError::Parse(e) => write!(f, "Store file is not valid JSON: {}", e),
            StoreError::Serialize(e) => write!(f, "Failed to serialize store: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

#[derive(Debug)]
pub enum AppError {
    MissingFields,
    EmailTaken,
    InvalidCredentials,
    UserNotFound,
    Store(StoreError),
    Hashing(String),
    Internal(String),
}

impl AppError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingFields
                | AppError::EmailTaken
                | AppError::InvalidCredentials
                | AppError::UserNotFound
        )
    }

    /// Message safe to show to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingFields => "Missing required fields",
            AppError::EmailTaken => "Email already registered",
            // Same text for unknown email and wrong password
            AppError::InvalidCredentials => "Invalid email or password",
            AppError::UserNotFound => "User not found",
            AppError::Store(_) | AppError::Hashing(_) | AppError::Internal(_) => "Server error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Store(e) => write!(f, "{}", e),
            AppError::Hashing(msg) => write!(f, "Password hashing error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            other => write!(f, "{}", other.public_message()),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message().to_string(),
        })
    }
}
