//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures that can occur during use case
//! execution: invalid input, missing resources and repository failures.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)          - Invalid preferences or price data
//! ├── Repository(RepositoryError)  - Persistence failures, unmodified
//! ├── Validation(String)           - Request validation failures
//! └── NotFound { .. }              - Resource not found
//! ```
//!
//! # Examples
//!
//! ```
//! use deazl_optimizer::application::error::ApplicationError;
//!
//! let err = ApplicationError::validation("too many items");
//! assert!(err.is_validation());
//!
//! let err = ApplicationError::not_found("ShoppingList", "list-123");
//! assert!(err.is_not_found());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
///
/// Wraps domain and repository errors with application-specific context
/// for use case execution failures.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from validation of preferences or prices.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Repository error, propagated unmodified.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Returns true if this is a not found error, including repository
    /// lookups that found nothing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Repository(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if the request itself was invalid.
    ///
    /// Domain errors count as validation failures: they come from bad
    /// preferences or malformed price data in the request.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Domain(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
