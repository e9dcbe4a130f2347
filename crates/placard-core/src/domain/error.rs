// ============================================================================
// domain/error.rs - CATALOG CONSTRUCTION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Extraction and validation never fail; these errors only arise while
/// building a [`Catalog`](crate::domain::Catalog) from untrusted data.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Placeholder key must not be empty")]
    EmptyKey,

    #[error("Placeholder key '{key}' contains a token delimiter ('{{' or '}}')")]
    KeyContainsDelimiter { key: String },

    #[error("Placeholder key '{key}' contains whitespace")]
    KeyContainsWhitespace { key: String },

    #[error("Placeholder '{key}' has an empty display name")]
    EmptyDisplayName { key: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Duplicate placeholder key in catalog: {key}")]
    DuplicateKey { key: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyKey => vec![
                "Every placeholder needs a non-empty key".into(),
                "Example: key = \"customer_name\"".into(),
            ],
            Self::KeyContainsDelimiter { key } => vec![
                format!("Remove the braces from '{}'", key),
                "Keys are written without braces; templates reference them as {key}".into(),
            ],
            Self::KeyContainsWhitespace { key } => vec![
                format!("'{}' cannot be referenced from a template", key),
                "Use underscores instead of spaces, e.g. customer_name".into(),
            ],
            Self::EmptyDisplayName { key } => vec![
                format!("Give '{}' a human-readable display name", key),
            ],
            Self::DuplicateKey { key } => vec![
                format!("'{}' is defined more than once", key),
                "Each key may appear only once across all catalog files".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyKey
            | Self::KeyContainsDelimiter { .. }
            | Self::KeyContainsWhitespace { .. }
            | Self::EmptyDisplayName { .. } => ErrorCategory::Validation,
            Self::DuplicateKey { .. } => ErrorCategory::Conflict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
}
