//! Placeholder catalog entity.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (Entity, immutable after build)                    │
//! │  ├── definitions: Vec<PlaceholderDefinition>  display order │
//! │  └── index: HashMap<PlaceholderKey, usize>    O(1) lookup   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A catalog is built once (from built-in data or a catalog file), wrapped in
//! an `Arc` and handed to whoever needs it. There is no process-wide instance:
//! tests build their own catalogs freely.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{DomainValidator as validator, error::DomainError, value_objects::PlaceholderKey};

/// Description shown for keys the catalog does not know.
pub const NO_DESCRIPTION: &str = "No description available";

/// Maximum edit distance at which a catalog key is offered as a correction.
const SUGGESTION_MAX_DISTANCE: usize = 2;

/// One recognised placeholder and its human-facing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderDefinition {
    pub key: PlaceholderKey,
    pub display_name: String,
    pub description: String,
}

impl PlaceholderDefinition {
    pub fn new(
        key: impl Into<PlaceholderKey>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            description: description.into(),
        }
    }
}

/// Ordered, read-only registry of recognised placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    definitions: Vec<PlaceholderDefinition>,
    index: HashMap<PlaceholderKey, usize>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// A catalog that recognises nothing; every token is invalid against it.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lookup(&self, key: &str) -> Option<&PlaceholderDefinition> {
        self.index.get(key).map(|&i| &self.definitions[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All keys in canonical display order.
    pub fn all_keys(&self) -> Vec<PlaceholderKey> {
        self.keys().cloned().collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PlaceholderKey> {
        self.definitions.iter().map(|d| &d.key)
    }

    pub fn definitions(&self) -> &[PlaceholderDefinition] {
        &self.definitions
    }

    /// Display name, or the key itself when the catalog does not know it.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).map_or(key, |d| d.display_name.as_str())
    }

    /// Description, or [`NO_DESCRIPTION`] when the catalog does not know it.
    pub fn description(&self, key: &str) -> &str {
        self.lookup(key).map_or(NO_DESCRIPTION, |d| d.description.as_str())
    }

    /// Closest known key to an unrecognised one.
    ///
    /// A candidate qualifies when it differs only in ASCII case or lies within
    /// a small Damerau-Levenshtein distance. Ties go to the earlier entry in
    /// display order. Known keys never get a suggestion.
    pub fn suggest(&self, key: &str) -> Option<&PlaceholderKey> {
        if self.contains(key) {
            return None;
        }

        if let Some(d) = self
            .definitions
            .iter()
            .find(|d| d.key.as_str().eq_ignore_ascii_case(key))
        {
            return Some(&d.key);
        }

        self.definitions
            .iter()
            .map(|d| (strsim::damerau_levenshtein(key, d.key.as_str()), &d.key))
            .filter(|(distance, _)| *distance <= SUGGESTION_MAX_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, k)| k)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Builder that validates every entry and rejects duplicate keys.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    definitions: Vec<PlaceholderDefinition>,
}

impl CatalogBuilder {
    pub fn define(
        self,
        key: impl Into<PlaceholderKey>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.add(PlaceholderDefinition::new(key, display_name, description))
    }

    pub fn add(mut self, definition: PlaceholderDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn extend(mut self, definitions: impl IntoIterator<Item = PlaceholderDefinition>) -> Self {
        self.definitions.extend(definitions);
        self
    }

    pub fn build(self) -> Result<Catalog, DomainError> {
        let mut index = HashMap::with_capacity(self.definitions.len());

        for (i, definition) in self.definitions.iter().enumerate() {
            validator::validate_definition(definition)?;
            if index.insert(definition.key.clone(), i).is_some() {
                return Err(DomainError::DuplicateKey {
                    key: definition.key.to_string(),
                });
            }
        }

        Ok(Catalog {
            definitions: self.definitions,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::builder()
            .define("customer_name", "Customer Name", "Full name of the customer")
            .define("appointment_date", "Appointment Date", "Date of the booking")
            .define("appointment_time", "Appointment Time", "Start time of the booking")
            .build()
            .unwrap()
    }

    #[test]
    fn preserves_insertion_order() {
        let keys = sample().all_keys();
        assert_eq!(keys, ["customer_name", "appointment_date", "appointment_time"]);
    }

    #[test]
    fn lookup_known_key() {
        let catalog = sample();
        let def = catalog.lookup("appointment_date").unwrap();
        assert_eq!(def.display_name, "Appointment Date");
        assert_eq!(catalog.description("customer_name"), "Full name of the customer");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(sample().lookup("Customer_Name").is_none());
    }

    #[test]
    fn unknown_key_falls_back() {
        let catalog = sample();
        assert_eq!(catalog.display_name("loyalty_points"), "loyalty_points");
        assert_eq!(catalog.description("loyalty_points"), NO_DESCRIPTION);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = Catalog::builder()
            .define("staff_name", "Staff", "")
            .define("staff_name", "Staff again", "")
            .build();

        assert_eq!(
            result,
            Err(DomainError::DuplicateKey {
                key: "staff_name".into()
            })
        );
    }

    #[test]
    fn rejects_invalid_key() {
        let result = Catalog::builder().define("{staff}", "Staff", "").build();
        assert!(matches!(result, Err(DomainError::KeyContainsDelimiter { .. })));
    }

    #[test]
    fn empty_catalog_knows_nothing() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(!catalog.contains("customer_name"));
        assert!(catalog.all_keys().is_empty());
    }

    #[test]
    fn suggests_near_miss() {
        let catalog = sample();
        assert_eq!(catalog.suggest("custmer_name").map(|k| k.as_str()), Some("customer_name"));
        assert_eq!(catalog.suggest("Customer_Name").map(|k| k.as_str()), Some("customer_name"));
    }

    #[test]
    fn no_suggestion_for_distant_or_known_keys() {
        let catalog = sample();
        assert!(catalog.suggest("loyalty_points").is_none());
        assert!(catalog.suggest("customer_name").is_none());
    }

    #[test]
    fn suggestion_ties_prefer_display_order() {
        let catalog = Catalog::builder()
            .define("room", "Room", "")
            .define("roam", "Roam", "")
            .build()
            .unwrap();

        // one substitution away from both
        assert_eq!(catalog.suggest("roum").map(|k| k.as_str()), Some("room"));
    }
}
