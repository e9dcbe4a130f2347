//! Built-in booking placeholders.
//!
//! Compiled into the binary so the tool works with zero configuration. The
//! order below is the order pickers show.

use placard_core::{
    application::ports::CatalogSource,
    domain::{Catalog, DomainError, PlaceholderDefinition},
    error::PlacardResult,
};

const BOOKING_PLACEHOLDERS: &[(&str, &str, &str)] = &[
    (
        "customer_name",
        "Customer Name",
        "Full name of the customer who made the booking",
    ),
    (
        "customer_email",
        "Customer Email",
        "Email address the customer booked with",
    ),
    (
        "customer_phone",
        "Customer Phone",
        "Phone number the customer booked with",
    ),
    ("service_name", "Service Name", "Name of the booked service"),
    (
        "service_duration",
        "Service Duration",
        "Length of the booked service, e.g. 45 min",
    ),
    ("service_price", "Service Price", "Price of the booked service"),
    (
        "appointment_date",
        "Appointment Date",
        "Date of the appointment",
    ),
    (
        "appointment_time",
        "Appointment Time",
        "Start time of the appointment",
    ),
    (
        "staff_name",
        "Staff Name",
        "Team member performing the service",
    ),
    ("business_name", "Business Name", "Name of your business"),
    (
        "business_address",
        "Business Address",
        "Street address where the appointment takes place",
    ),
    (
        "business_phone",
        "Business Phone",
        "Phone number customers can call",
    ),
    (
        "booking_link",
        "Booking Link",
        "Link for the customer to view or reschedule the booking",
    ),
    (
        "cancellation_link",
        "Cancellation Link",
        "Link for the customer to cancel the booking",
    ),
];

/// Build the built-in booking catalog.
pub fn booking_catalog() -> Result<Catalog, DomainError> {
    Catalog::builder()
        .extend(
            BOOKING_PLACEHOLDERS
                .iter()
                .map(|&(key, name, description)| PlaceholderDefinition::new(key, name, description)),
        )
        .build()
}

/// [`CatalogSource`] serving the built-in booking catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> PlacardResult<Catalog> {
        Ok(booking_catalog()?)
    }

    fn origin(&self) -> String {
        "built-in booking catalog".into()
    }
}
