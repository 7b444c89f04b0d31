use thiserror::Error;

use rostersync_core::api::ApiError;
use rostersync_core::roster::DateRangeError;

/// Errors surfaced by coordinator operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinatorError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Range(#[from] DateRangeError),
}

/// Result type for coordinator operations.
pub type Result<T> = std::result::Result<T, CoordinatorError>;
