//! Unified application error type.
//!
//! Validation failures and rejected logins are not errors; they are
//! returned as values. `AppError` covers store, hashing and configuration
//! failures, plus store-level conflicts.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Store conflicts
    #[error("{0} already exists")]
    Conflict(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Password hashing error")]
    Hash(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Conflict(_) => "CONFLICT",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Hash(_) => "HASH_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Conflict(msg) => {
                if msg.ends_with("already exists") {
                    msg.clone()
                } else {
                    format!("{} already exists", msg)
                }
            }

            // Hide details for internal/security errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Hash(msg) => {
                tracing::error!("Hash error: {}", msg);
                "A password processing error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Password(msg) => AppError::Hash(msg),
            DomainError::Config(msg) => AppError::Config(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message() {
        let err = AppError::conflict("User");

        assert_eq!(err.to_string(), "User already exists");
        assert_eq!(err.user_message(), "User already exists");
        assert_eq!(err.code(), "CONFLICT");
    }

    #[test]
    fn test_conflict_message_not_duplicated() {
        let err = AppError::conflict("User already exists");

        assert_eq!(err.user_message(), "User already exists");
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = AppError::internal("lock poisoned: secret detail");

        assert_eq!(err.user_message(), "An internal error occurred");
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_domain_password_error_maps_to_hash() {
        let err: AppError = DomainError::password("Invalid hash format").into();

        assert!(matches!(err, AppError::Hash(_)));
        assert_eq!(err.user_message(), "A password processing error occurred");
    }

    #[test]
    fn test_domain_config_error_maps_to_config() {
        let err: AppError = DomainError::config("bad params").into();

        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.user_message(), "Configuration error: bad params");
    }
}
