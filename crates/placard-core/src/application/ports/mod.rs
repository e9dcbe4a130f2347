//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `placard-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CatalogSource`: Where the placeholder catalog comes from
//!   - `TemplateReader`: Template file access
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`PlaceholderService` and `TemplateDraft`, used by the CLI layer)

pub mod output;

pub use output::{CatalogSource, TemplateReader};

#[cfg(test)]
pub use output::{MockCatalogSource, MockTemplateReader};
