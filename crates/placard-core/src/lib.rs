//! Placard Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Placard, the
//! placeholder checker for notification templates, following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           placard-cli (CLI)             │
//! │      (Presentation / Driving side)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (PlaceholderService, TemplateDraft)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: CatalogSource, Reader)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    placard-adapters (Infrastructure)    │
//! │ (BuiltinCatalog, TomlCatalogSource, fs) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Catalog, extract, ValidationResult)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use placard_core::prelude::*;
//!
//! let catalog = Catalog::builder()
//!     .define("customer_name", "Customer Name", "Full name of the customer")
//!     .define("appointment_date", "Appointment Date", "Date of the appointment")
//!     .build()
//!     .unwrap();
//! let service = PlaceholderService::new(Arc::new(catalog));
//!
//! let mut draft = TemplateDraft::new("Hi {customer_name}!").with_required(["appointment_date"]);
//! assert_eq!(draft.analyze(&service).missing_placeholders, ["appointment_date"]);
//!
//! draft.insert_placeholder(&PlaceholderKey::from("appointment_date"));
//! assert!(draft.analyze(&service).is_valid);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        KeySuggestion, PlaceholderInfo, PlaceholderService, TemplateAnalysis, TemplateDraft,
        ports::{CatalogSource, TemplateReader},
    };
    pub use crate::domain::{
        Catalog, NO_DESCRIPTION, PlaceholderDefinition, PlaceholderKey, RequiredVariables,
        TokenOccurrence, ValidationResult, extract, scan,
    };
    pub use crate::error::{PlacardError, PlacardResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
