//! Application layer for Placard.
//!
//! This layer contains:
//! - **Services**: The engine contract (PlaceholderService) and editing state (TemplateDraft)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! extraction or diffing logic itself. Those rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    KeySuggestion, PlaceholderInfo, PlaceholderService, TemplateAnalysis, TemplateDraft,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CatalogSource, TemplateReader};

pub use error::ApplicationError;
