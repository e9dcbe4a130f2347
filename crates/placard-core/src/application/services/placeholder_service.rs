//! Placeholder Service - the engine's query/mutate contract.
//!
//! Wraps an immutable [`Catalog`] and exposes everything the presentation
//! layer needs on each edit:
//! 1. Extract tokens from the current content
//! 2. Diff them against the caller's required set and the catalog
//! 3. Report the catalog's keys for pickers
//!
//! Nothing here is cached. Every call recomputes from its arguments, and the
//! caller decides when to call.

use std::{path::Path, sync::Arc};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CatalogSource, TemplateReader},
    },
    domain::{
        Catalog, PlaceholderKey, RequiredVariables, TokenOccurrence, ValidationResult, extract,
        scan,
    },
    error::PlacardResult,
};

/// Everything the presentation layer renders after one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateAnalysis {
    pub extracted_placeholders: Vec<PlaceholderKey>,
    pub missing_placeholders: Vec<PlaceholderKey>,
    pub invalid_placeholders: Vec<PlaceholderKey>,
    pub is_valid: bool,
    pub available_placeholders: Vec<PlaceholderKey>,
    /// Likely corrections for entries of `invalid_placeholders`.
    pub suggestions: Vec<KeySuggestion>,
}

/// A catalog key that closely resembles an unrecognised token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySuggestion {
    pub unknown: PlaceholderKey,
    pub did_you_mean: PlaceholderKey,
}

/// Display data for one key, known or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderInfo {
    pub key: PlaceholderKey,
    pub display_name: String,
    pub description: String,
    pub known: bool,
}

/// Main placeholder validation service.
#[derive(Debug, Clone)]
pub struct PlaceholderService {
    catalog: Arc<Catalog>,
}

impl PlaceholderService {
    /// Create a service over an already-built catalog.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use placard_core::{application::PlaceholderService, domain::{Catalog, RequiredVariables}};
    ///
    /// let catalog = Catalog::builder()
    ///     .define("customer_name", "Customer Name", "Full name of the customer")
    ///     .build()
    ///     .unwrap();
    /// let service = PlaceholderService::new(Arc::new(catalog));
    ///
    /// let analysis = service.analyze("Hi {customer_name}", &RequiredVariables::new());
    /// assert!(analysis.is_valid);
    /// ```
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Load the catalog from a source once and wrap it.
    #[instrument(skip_all, fields(origin = %source.origin()))]
    pub fn from_source(source: &dyn CatalogSource) -> PlacardResult<Self> {
        let catalog = source.load()?;
        info!(placeholders = catalog.len(), "Catalog loaded");
        Ok(Self::new(Arc::new(catalog)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn shared_catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Distinct tokens in first-occurrence order.
    pub fn extract(&self, content: &str) -> Vec<PlaceholderKey> {
        extract(content)
    }

    /// Every token match with its position, duplicates included.
    pub fn occurrences(&self, content: &str) -> Vec<TokenOccurrence> {
        scan(content).collect()
    }

    pub fn validate(&self, content: &str, required: &RequiredVariables) -> ValidationResult {
        ValidationResult::compute(&extract(content), required, &self.catalog)
    }

    /// Full analysis of `content` against a snapshot of the required set.
    #[instrument(skip_all, fields(content_len = content.len(), required = required.len()))]
    pub fn analyze(&self, content: &str, required: &RequiredVariables) -> TemplateAnalysis {
        let extracted = extract(content);
        let result = ValidationResult::compute(&extracted, required, &self.catalog);

        let suggestions = result
            .invalid
            .iter()
            .filter_map(|unknown| {
                self.catalog.suggest(unknown.as_str()).map(|k| KeySuggestion {
                    unknown: unknown.clone(),
                    did_you_mean: k.clone(),
                })
            })
            .collect();

        debug!(
            extracted = extracted.len(),
            missing = result.missing.len(),
            invalid = result.invalid.len(),
            is_valid = result.is_valid,
            "Template analysed"
        );

        TemplateAnalysis {
            extracted_placeholders: extracted,
            missing_placeholders: result.missing,
            invalid_placeholders: result.invalid,
            is_valid: result.is_valid,
            available_placeholders: self.catalog.all_keys(),
            suggestions,
        }
    }

    /// Read a template through the given reader, then analyse it.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn analyze_file(
        &self,
        reader: &dyn TemplateReader,
        path: &Path,
        required: &RequiredVariables,
    ) -> PlacardResult<TemplateAnalysis> {
        if !reader.exists(path) {
            return Err(ApplicationError::TemplateNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let content = reader.read_to_string(path)?;
        Ok(self.analyze(&content, required))
    }

    /// Catalog keys in display order, for pickers.
    pub fn available_placeholders(&self) -> Vec<PlaceholderKey> {
        self.catalog.all_keys()
    }

    /// Display data for `key`, falling back gracefully for unknown keys.
    pub fn describe(&self, key: &str) -> PlaceholderInfo {
        PlaceholderInfo {
            key: PlaceholderKey::from(key),
            display_name: self.catalog.display_name(key).to_owned(),
            description: self.catalog.description(key).to_owned(),
            known: self.catalog.contains(key),
        }
    }

    pub fn describe_all(&self) -> Vec<PlaceholderInfo> {
        self.catalog
            .keys()
            .map(|key| self.describe(key.as_str()))
            .collect()
    }

    /// Mark `key` as required in the caller's collection.
    pub fn add_required_variable(
        &self,
        required: &mut RequiredVariables,
        key: impl Into<PlaceholderKey>,
    ) -> bool {
        let key = key.into();
        if !self.catalog.contains(key.as_str()) {
            debug!(%key, "Requiring a key the catalog does not define");
        }
        required.add(key)
    }

    /// Unmark `key` in the caller's collection.
    pub fn remove_required_variable(&self, required: &mut RequiredVariables, key: &str) -> bool {
        required.remove(key)
    }
}
