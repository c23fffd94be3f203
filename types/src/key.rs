//! Category key newtype.
//!
//! Filter keys and category keys are plain strings read from markup
//! attributes. `FilterKey` names a selected category and is never empty;
//! visibility matching compares the raw attribute strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-empty category identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FilterKey(String);

impl FilterKey {
    /// Build a key, rejecting the empty string.
    ///
    /// Whitespace is kept as-is: `" nature"` and `"nature"` are different
    /// keys, the same way the markup attributes would compare.
    pub fn new(value: impl Into<String>) -> Result<Self, KeyError> {
        let value = value.into();
        if value.is_empty() {
            return Err(KeyError::Empty);
        }
        Ok(Self(value))
    }

    /// Read a key from an optional attribute value.
    ///
    /// Absent and empty attributes both yield `None`.
    pub fn from_attribute(value: Option<String>) -> Option<Self> {
        value.and_then(|v| Self::new(v).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FilterKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FilterKey> for String {
    fn from(key: FilterKey) -> Self {
        key.0
    }
}

/// Errors from building a [`FilterKey`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    Empty,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "filter key must not be empty"),
        }
    }
}

impl std::error::Error for KeyError {}
