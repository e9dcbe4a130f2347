//! Application layer errors.
//!
//! These errors represent failures at the ports (loading a catalog, reading a
//! template), not in the engine. Catalog data errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while talking to the outside world.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A catalog source could not produce a catalog.
    #[error("Failed to load catalog from {origin}: {reason}")]
    CatalogLoad { origin: String, reason: String },

    /// A catalog source pointed at nothing.
    #[error("Catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// The template file does not exist.
    #[error("Template not found at {path}")]
    TemplateNotFound { path: PathBuf },

    /// The template file exists but could not be read.
    #[error("Failed to read template {path}: {reason}")]
    TemplateRead { path: PathBuf, reason: String },

    /// Shared state guarded by a lock was poisoned.
    #[error("Lock poisoned: {resource}")]
    LockPoisoned { resource: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CatalogLoad { origin, .. } => vec![
                format!("Check the catalog file(s) at {}", origin),
                "Each entry needs: [[placeholder]] key, display_name, description".into(),
            ],
            Self::CatalogNotFound { path } => vec![
                format!("Nothing exists at {}", path.display()),
                "Point --catalog at a .toml file or a directory of .toml files".into(),
                "Or omit --catalog to use the built-in booking catalog".into(),
            ],
            Self::TemplateNotFound { path } => vec![
                format!("Check the path: {}", path.display()),
                "Use '-' to read the template from stdin".into(),
            ],
            Self::TemplateRead { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that you have read permissions".into(),
                "Templates must be UTF-8 text".into(),
            ],
            Self::LockPoisoned { .. } => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CatalogLoad { .. } => ErrorCategory::Configuration,
            Self::CatalogNotFound { .. } | Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateRead { .. } | Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}
