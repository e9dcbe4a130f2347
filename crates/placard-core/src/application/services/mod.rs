//! Application services - the engine's public contract.
//!
//! Services coordinate the domain layer and ports to answer the questions a
//! template editor asks: which tokens are there, which are missing, which
//! are unknown.

pub mod placeholder_service;
pub mod template_draft;

pub use placeholder_service::{KeySuggestion, PlaceholderInfo, PlaceholderService, TemplateAnalysis};
pub use template_draft::TemplateDraft;
