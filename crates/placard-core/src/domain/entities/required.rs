//! The caller-owned set of required placeholder keys.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PlaceholderKey;

/// Ordered set of keys a template must reference.
///
/// Insertion order is preserved and drives the order of the `missing` list
/// in a [`ValidationResult`](super::ValidationResult). Both mutators are
/// idempotent and report whether anything changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PlaceholderKey>", into = "Vec<PlaceholderKey>")]
pub struct RequiredVariables {
    keys: Vec<PlaceholderKey>,
}

impl RequiredVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key` unless it is already required.
    pub fn add(&mut self, key: impl Into<PlaceholderKey>) -> bool {
        let key = key.into();
        if self.contains(key.as_str()) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Drop `key` if present; the relative order of the rest is kept.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k.as_str() != key);
        self.keys.len() != before
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k.as_str() == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaceholderKey> {
        self.keys.iter()
    }

    pub fn as_slice(&self) -> &[PlaceholderKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: Into<PlaceholderKey>> FromIterator<K> for RequiredVariables {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut required = Self::new();
        for key in iter {
            required.add(key);
        }
        required
    }
}

impl<K: Into<PlaceholderKey>> Extend<K> for RequiredVariables {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl From<Vec<PlaceholderKey>> for RequiredVariables {
    fn from(keys: Vec<PlaceholderKey>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<RequiredVariables> for Vec<PlaceholderKey> {
    fn from(required: RequiredVariables) -> Self {
        required.keys
    }
}

impl<'a> IntoIterator for &'a RequiredVariables {
    type Item = &'a PlaceholderKey;
    type IntoIter = std::slice::Iter<'a, PlaceholderKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
