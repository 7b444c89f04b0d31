use thiserror::Error;

/// Errors surfaced by the remote roster API.
///
/// Every endpoint answers with a `{success, data, error}` envelope; a
/// transport-level failure maps to `Request`, a non-2xx status to `Server`,
/// and a well-formed `success: false` envelope to `Rejected`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Rejected by API: {0}")]
    Rejected(String),
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for remote API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
