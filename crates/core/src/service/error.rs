use thiserror::Error;

/// Errors surfaced at the execution service boundary.
///
/// There is no build-failure kind: document rendering is a total
/// function over owned strings and cannot fail at runtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The session could not be established. Fatal to the invocation.
    #[error("connection failed: {0}")]
    Connection(String),
    /// A create or delete document was rejected by the service.
    #[error("execution failed: {0}")]
    Execution(String),
    /// A processing command failed. The create it followed still stands.
    #[error("processing failed: {0}")]
    Processing(String),
}

impl ServiceError {
    /// Connection failures abort the whole invocation; everything else
    /// is reported per step and the sequence continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ServiceError::Connection(_))
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
