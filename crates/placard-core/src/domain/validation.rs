use crate::domain::{entities::PlaceholderDefinition, error::DomainError};

/// Centralized domain validation.
///
/// All rules a catalog entry must satisfy live here, not scattered across
/// entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A catalog key must be referenceable from a template: non-empty, no
    /// token delimiters, no whitespace.
    pub fn validate_key(key: &str) -> Result<(), DomainError> {
        if key.is_empty() {
            return Err(DomainError::EmptyKey);
        }
        if key.contains(['{', '}']) {
            return Err(DomainError::KeyContainsDelimiter { key: key.into() });
        }
        if key.chars().any(char::is_whitespace) {
            return Err(DomainError::KeyContainsWhitespace { key: key.into() });
        }
        Ok(())
    }

    pub fn validate_definition(definition: &PlaceholderDefinition) -> Result<(), DomainError> {
        Self::validate_key(definition.key.as_str())?;
        if definition.display_name.trim().is_empty() {
            return Err(DomainError::EmptyDisplayName {
                key: definition.key.to_string(),
            });
        }
        Ok(())
    }
}
