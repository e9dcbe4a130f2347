//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `placard-adapters` crate provides implementations.

use crate::domain::Catalog;
use crate::error::PlacardResult;
use std::path::Path;

/// Port for obtaining the placeholder catalog.
///
/// Called once at startup; the result is frozen behind an `Arc`.
///
/// Implemented by:
/// - `placard_adapters::BuiltinCatalog` (booking placeholders compiled in)
/// - `placard_adapters::TomlCatalogSource` (user-defined catalog files)
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    /// Build the catalog.
    fn load(&self) -> PlacardResult<Catalog>;

    /// Human-readable origin, used in logs and error messages.
    fn origin(&self) -> String;
}

/// Port for reading template content.
///
/// Implemented by:
/// - `placard_adapters::filesystem::LocalFilesystem` (production)
/// - `placard_adapters::filesystem::MemoryFilesystem` (stdin, tests)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateReader: Send + Sync {
    /// Read the whole template as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> PlacardResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
