//! The missing/invalid diff between a template's tokens, the required set
//! and the catalog.

use serde::Serialize;

use crate::domain::{
    entities::{Catalog, RequiredVariables},
    value_objects::PlaceholderKey,
};

/// Outcome of diffing extracted tokens against the required set and catalog.
///
/// `missing` and `invalid` are computed independently: a key that is both
/// required and unknown to the catalog shows up in `missing` when absent from
/// the content and in `invalid` when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Required keys not referenced by the content, in required order.
    pub missing: Vec<PlaceholderKey>,
    /// Referenced keys the catalog does not know, in extraction order.
    pub invalid: Vec<PlaceholderKey>,
    pub is_valid: bool,
}

impl ValidationResult {
    pub fn compute(
        extracted: &[PlaceholderKey],
        required: &RequiredVariables,
        catalog: &Catalog,
    ) -> Self {
        let missing: Vec<_> = required
            .iter()
            .filter(|key| !extracted.contains(*key))
            .cloned()
            .collect();

        let invalid: Vec<_> = extracted
            .iter()
            .filter(|key| !catalog.contains(key.as_str()))
            .cloned()
            .collect();

        let is_valid = missing.is_empty() && invalid.is_empty();

        Self {
            missing,
            invalid,
            is_valid,
        }
    }
}
