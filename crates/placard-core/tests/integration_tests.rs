//! Integration tests for placard-core.

use std::sync::Arc;

use placard_core::prelude::*;

fn booking_service() -> PlaceholderService {
    let catalog = Catalog::builder()
        .define("customer_name", "Customer Name", "Full name of the customer")
        .define("service_name", "Service Name", "Name of the booked service")
        .define("appointment_date", "Appointment Date", "Date of the appointment")
        .define("appointment_time", "Appointment Time", "Start time of the appointment")
        .define("business_name", "Business Name", "Name of the business")
        .build()
        .unwrap();
    PlaceholderService::new(Arc::new(catalog))
}

#[test]
fn full_editing_session() {
    let service = booking_service();
    let mut draft = TemplateDraft::new("Hello {customer_name},");

    // user marks two variables as required
    draft.add_required("customer_name");
    draft.add_required("appointment_date");

    let analysis = draft.analyze(&service);
    assert_eq!(analysis.missing_placeholders, ["appointment_date"]);
    assert!(analysis.invalid_placeholders.is_empty());
    assert!(!analysis.is_valid);

    // picker offers the catalog; user inserts the missing one
    assert!(analysis.available_placeholders.iter().any(|k| k == "appointment_date"));
    draft.insert_placeholder(&PlaceholderKey::from("appointment_date"));

    let analysis = draft.analyze(&service);
    assert!(analysis.is_valid);
    assert_eq!(
        analysis.extracted_placeholders,
        ["customer_name", "appointment_date"]
    );

    // user types a token by hand, with a typo
    draft.set_content(format!("{} at {{apointment_time}}", draft.content()));
    let analysis = draft.analyze(&service);
    assert_eq!(analysis.invalid_placeholders, ["apointment_time"]);
    assert_eq!(analysis.suggestions[0].did_you_mean, "appointment_time");

    // un-requiring does not make an unknown token valid
    draft.remove_required("appointment_date");
    assert!(!draft.analyze(&service).is_valid);
}

#[test]
fn spec_examples() {
    let service = booking_service();

    assert_eq!(service.extract("{b} text {a} more {b}"), ["b", "a"]);
    assert!(service.extract("{open and }close{").is_empty());

    let required: RequiredVariables = ["bogus_key"].into_iter().collect();
    let analysis = service.analyze("{bogus_key}", &required);
    assert!(analysis.missing_placeholders.is_empty());
    assert_eq!(analysis.invalid_placeholders, ["bogus_key"]);
    assert!(!analysis.is_valid);

    let required: RequiredVariables = ["service_name", "business_name"].into_iter().collect();
    let analysis = service.analyze("", &required);
    assert_eq!(analysis.missing_placeholders, ["service_name", "business_name"]);
    assert!(analysis.extracted_placeholders.is_empty());
    assert!(analysis.invalid_placeholders.is_empty());
}

#[test]
fn catalog_fallbacks_for_unregistered_key() {
    let service = booking_service();
    let catalog = service.catalog();

    assert_eq!(catalog.display_name("gift_card"), "gift_card");
    assert_eq!(catalog.description("gift_card"), NO_DESCRIPTION);
    assert!(catalog.lookup("gift_card").is_none());
}

#[test]
fn catalog_is_shared_not_copied() {
    let service = booking_service();
    let a = service.shared_catalog();
    let b = service.clone().shared_catalog();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn occurrences_locate_every_token() {
    let service = booking_service();
    let content = "{business_name}: {customer_name}\n{customer_name}, see you!";
    let occurrences = service.occurrences(content);

    assert_eq!(occurrences.len(), 3);
    assert_eq!(occurrences[2].line, 2);
    assert_eq!(occurrences[2].column, 1);
    assert_eq!(&content[occurrences[1].span.clone()], "{customer_name}");
}
