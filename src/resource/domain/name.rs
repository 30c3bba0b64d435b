//! Validated resource category name.

use super::ResourceDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_NAME_LENGTH: usize = 64;

/// Stable name of a resource category, such as `ELB` or `EC2Instance`.
///
/// Filter configuration references categories by this name, so it is kept
/// exactly as written: case is preserved and no separators are allowed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceTypeName(String);

impl ResourceTypeName {
    /// Creates a validated resource type name.
    ///
    /// Surrounding whitespace is trimmed. Only ASCII alphanumerics are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceDomainError::EmptyResourceTypeName`] when the value
    /// is empty after trimming,
    /// [`ResourceDomainError::ResourceTypeNameTooLong`] when it exceeds 64
    /// characters, or [`ResourceDomainError::InvalidResourceTypeName`] when it
    /// contains anything but ASCII letters and digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ResourceDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ResourceDomainError::EmptyResourceTypeName);
        }

        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(ResourceDomainError::ResourceTypeNameTooLong(raw));
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ResourceDomainError::InvalidResourceTypeName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Creates a name from a fixed literal such as an adapter's category
    /// constant.
    ///
    /// The literal is only checked when debug assertions are enabled.
    #[must_use]
    pub fn from_static(value: &'static str) -> Self {
        debug_assert!(
            Self::new(value).is_ok_and(|name| name.as_str() == value),
            "invalid resource type name literal: {value:?}"
        );
        Self(value.to_owned())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceTypeName {
    type Error = ResourceDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceTypeName> for String {
    fn from(name: ResourceTypeName) -> Self {
        name.0
    }
}

impl AsRef<str> for ResourceTypeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ResourceTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
