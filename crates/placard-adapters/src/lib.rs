//! Infrastructure adapters for Placard.
//!
//! This crate implements the ports defined in `placard-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_catalog;
pub mod catalog_loader;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin_catalog::{BuiltinCatalog, booking_catalog};
pub use catalog_loader::TomlCatalogSource;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
