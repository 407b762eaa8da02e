use thiserror::Error;

/// Error type for backend construction and control operations.
///
/// Polling never returns errors; out-of-range or absent devices degrade to
/// default values instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to initialize the backend or one of its subsystems.
    #[error("Backend init failed: {0}")]
    BackendInit(String),
    /// Operation is not supported on the current device/backend.
    #[error("Operation unsupported")]
    Unsupported,
    /// A generic backend error.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Convenient result alias for backend operations.
pub type Result<T> = std::result::Result<T, Error>;
