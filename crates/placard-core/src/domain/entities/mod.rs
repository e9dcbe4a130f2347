pub mod catalog;
pub mod required;
pub mod token;
pub mod validation_result;

pub use catalog::{Catalog, CatalogBuilder, NO_DESCRIPTION, PlaceholderDefinition};
pub use required::RequiredVariables;
pub use token::{TokenOccurrence, Tokens, extract, scan};
pub use validation_result::ValidationResult;
