//! Domain-level errors.
//!
//! These errors represent failures inside domain logic. They are
//! independent of infrastructure concerns (database, CLI).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Hashing or hash verification could not be performed
    #[error("Password error: {0}")]
    Password(String),

    /// Invalid hasher or policy configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        DomainError::Config(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
