//! Unified error handling for Placard Core.
//!
//! The engine itself is infallible. Errors come from the edges: building a
//! catalog from untrusted data, and the ports that load catalogs or read
//! template files. This module wraps both layers in one type with
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Placard Core operations.
#[derive(Debug, Error, Clone)]
pub enum PlacardError {
    /// Errors from the domain layer (invalid catalog data).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (catalog sources, template reads).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl PlacardError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type PlacardResult<T> = Result<T, PlacardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn duplicate_key_is_a_validation_error() {
        let err: PlacardError = DomainError::DuplicateKey { key: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("more than once")));
    }

    #[test]
    fn missing_template_is_not_found() {
        let err: PlacardError = ApplicationError::TemplateNotFound {
            path: PathBuf::from("reminder.txt"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
