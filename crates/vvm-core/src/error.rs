//! Common error types for vehicle backends

use thiserror::Error;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors that can occur in vehicle backends
#[derive(Debug, Error)]
pub enum BackendError {
    /// No vehicle is known under the given VIN
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    /// Transport/communication error towards the remote service
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote service answered, but with an error
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Timeout waiting for the remote service
    #[error("Operation timed out")]
    Timeout,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            BackendError::VehicleNotFound(_) => 404,
            BackendError::Transport(_) => 503,
            BackendError::Upstream(_) => 502,
            BackendError::Timeout => 504,
            BackendError::Internal(_) => 500,
        }
    }
}
