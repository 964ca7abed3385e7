use common::OrderId;
use ordering::ValidationError;
use thiserror::Error;

/// Errors reported by the backend collaborator.
///
/// These are recoverable from the caller's point of view: nothing is retried
/// or rolled back automatically.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend could not be reached or refused the request.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The record to update does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// An order item referenced an order header that was never created.
    #[error("Unknown order: {0}")]
    UnknownOrder(OrderId),

    /// A stored record could not be turned back into a domain value.
    #[error("Invalid stored record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    /// Submitted customer details failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;
