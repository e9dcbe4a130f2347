//! Template Draft - the caller-side editing state.
//!
//! A draft is the single authoritative copy of a template being edited: its
//! content and its required keys. The service never stores either; it is
//! handed the draft's current state on every analysis.

use serde::{Deserialize, Serialize};

use crate::{
    application::services::{PlaceholderService, TemplateAnalysis},
    domain::{PlaceholderKey, RequiredVariables},
};

/// Notification template under edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDraft {
    content: String,
    #[serde(default)]
    required: RequiredVariables,
}

impl TemplateDraft {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            required: RequiredVariables::new(),
        }
    }

    pub fn with_required<K: Into<PlaceholderKey>>(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.required.extend(keys);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn required(&self) -> &RequiredVariables {
        &self.required
    }

    /// Replace the whole content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn add_required(&mut self, key: impl Into<PlaceholderKey>) -> bool {
        self.required.add(key)
    }

    pub fn remove_required(&mut self, key: &str) -> bool {
        self.required.remove(key)
    }

    /// Append `{key}` to the content, separated by a space unless the content
    /// is empty or already ends in whitespace.
    pub fn insert_placeholder(&mut self, key: &PlaceholderKey) {
        if self
            .content
            .chars()
            .next_back()
            .is_some_and(|c| !c.is_whitespace())
        {
            self.content.push(' ');
        }
        self.content.push_str(&key.to_token());
    }

    pub fn analyze(&self, service: &PlaceholderService) -> TemplateAnalysis {
        service.analyze(&self.content, &self.required)
    }

    pub fn into_parts(self) -> (String, RequiredVariables) {
        (self.content, self.required)
    }
}
