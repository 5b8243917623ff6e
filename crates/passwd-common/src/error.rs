//! Common error types for the password service.

use thiserror::Error;

/// Errors surfaced by the password service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswdError {
    /// Requested password length is outside the accepted range
    #[error("Password length must be between {min} and {max}, got {length}")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },

    /// The adaptive hash primitive failed
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PasswdError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidLength { .. } => 400,
            Self::Hashing(_) => 500,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
        }
    }

    /// Returns true if this error should be retried.
    ///
    /// Malformed input never becomes valid on retry, and the remaining
    /// variants are deterministic for a given process.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
