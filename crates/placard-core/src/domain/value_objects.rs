//! Domain value objects: [`PlaceholderKey`].
//!
//! # Design
//!
//! A key is an opaque, case-sensitive string. The type itself accepts any
//! text because extracted tokens and user-chosen required keys may name
//! things the catalog has never heard of; those surface as *data* during
//! validation, never as construction errors. The stricter rules that apply
//! to catalog entries live in `validation.rs`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a placeholder, e.g. `customer_name`.
///
/// Compared with exact, case-sensitive string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderKey(String);

impl PlaceholderKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// The key wrapped in token delimiters, ready to be placed in a template.
    ///
    /// ```
    /// use placard_core::domain::PlaceholderKey;
    ///
    /// assert_eq!(PlaceholderKey::new("staff_name").to_token(), "{staff_name}");
    /// ```
    pub fn to_token(&self) -> String {
        format!("{{{}}}", self.0)
    }
}

impl fmt::Display for PlaceholderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaceholderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PlaceholderKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlaceholderKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for PlaceholderKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for PlaceholderKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PlaceholderKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
