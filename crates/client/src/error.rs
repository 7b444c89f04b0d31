//! Client error types.

use rostersync_core::api::ApiError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("API rejected request: {0}")]
    Rejected(String),

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => ApiError::Request(e.to_string()),
            ClientError::ServerError { status, message } => ApiError::Server { status, message },
            ClientError::Rejected(message) => ApiError::Rejected(message),
            ClientError::NotFound { resource } => ApiError::NotFound { resource },
            ClientError::InvalidResponse(message) => ApiError::InvalidResponse(message),
            ClientError::Json(e) => ApiError::InvalidResponse(e.to_string()),
            ClientError::InvalidInput(message) => ApiError::Request(message),
            ClientError::Io(e) => ApiError::Request(e.to_string()),
        }
    }
}
