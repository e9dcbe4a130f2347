// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Placard.
//!
//! This module contains the placeholder engine as pure logic: the catalog,
//! token extraction and the validation diff. Catalog loading, file access and
//! presentation are handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Infallible queries**: extraction and validation never return errors
//! - **Immutable catalog**: built once, shared by reference
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Key rules, exposed only through `DomainValidator`
mod validation;

// Re-exports for convenience
pub use entities::{
    Catalog, CatalogBuilder, NO_DESCRIPTION, PlaceholderDefinition, RequiredVariables,
    TokenOccurrence, Tokens, ValidationResult, extract, scan,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::PlaceholderKey;

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> Catalog {
        Catalog::builder()
            .define("customer_name", "Customer Name", "Full name of the customer")
            .define("service_name", "Service Name", "Name of the booked service")
            .define("appointment_date", "Appointment Date", "Date of the appointment")
            .define("appointment_time", "Appointment Time", "Start time of the appointment")
            .build()
            .unwrap()
    }

    // ========================================================================
    // End-to-end engine tests (extract → diff)
    // ========================================================================

    #[test]
    fn reminder_template_passes() {
        let content = "Hi {customer_name}, see you on {appointment_date} at {appointment_time} \
                       for your {service_name}.";
        let required: RequiredVariables = ["customer_name", "appointment_date"].into_iter().collect();

        let extracted = extract(content);
        let result = ValidationResult::compute(&extracted, &required, &booking());

        assert_eq!(
            extracted,
            ["customer_name", "appointment_date", "appointment_time", "service_name"]
        );
        assert!(result.is_valid);
    }

    #[test]
    fn typo_is_invalid_and_leaves_required_key_missing() {
        let content = "Hi {custmer_name}";
        let required: RequiredVariables = ["customer_name"].into_iter().collect();
        let catalog = booking();

        let result = ValidationResult::compute(&extract(content), &required, &catalog);

        assert_eq!(result.missing, ["customer_name"]);
        assert_eq!(result.invalid, ["custmer_name"]);
        assert_eq!(
            catalog.suggest("custmer_name").map(PlaceholderKey::as_str),
            Some("customer_name")
        );
    }

    #[test]
    fn toggling_required_key_changes_outcome() {
        let catalog = booking();
        let content = "Hi {customer_name}";
        let extracted = extract(content);
        let mut required = RequiredVariables::new();

        assert!(ValidationResult::compute(&extracted, &required, &catalog).is_valid);

        required.add("service_name");
        assert!(!ValidationResult::compute(&extracted, &required, &catalog).is_valid);

        required.remove("service_name");
        assert!(ValidationResult::compute(&extracted, &required, &catalog).is_valid);
    }

    #[test]
    fn substituted_catalog_changes_recognition() {
        let content = "{loyalty_points}";
        let required = RequiredVariables::new();
        let extracted = extract(content);

        let custom = Catalog::builder()
            .define("loyalty_points", "Loyalty Points", "Points balance")
            .build()
            .unwrap();

        assert!(!ValidationResult::compute(&extracted, &required, &booking()).is_valid);
        assert!(ValidationResult::compute(&extracted, &required, &custom).is_valid);
    }
}
