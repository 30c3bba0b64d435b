//! Validated load balancer name type.

use super::ElbDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length the provider accepts for a classic load balancer name.
const MAX_NAME_LENGTH: usize = 32;

/// Provider-assigned unique name of a classic load balancer.
///
/// The name is both the key for delete calls and the label shown to
/// operators, so it is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoadBalancerName(String);

impl LoadBalancerName {
    /// Creates a validated load balancer name.
    ///
    /// The value is stored exactly as given, since it doubles as the delete
    /// key.
    ///
    /// # Errors
    ///
    /// Returns [`ElbDomainError::EmptyLoadBalancerName`] when the value is
    /// empty or only whitespace,
    /// [`ElbDomainError::SurroundingWhitespace`] when it starts or ends with
    /// whitespace, or [`ElbDomainError::LoadBalancerNameTooLong`] when it
    /// exceeds 32 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ElbDomainError> {
        let raw = value.into();

        if raw.trim().is_empty() {
            return Err(ElbDomainError::EmptyLoadBalancerName);
        }

        if raw.trim().len() != raw.len() {
            return Err(ElbDomainError::SurroundingWhitespace(raw));
        }

        if raw.chars().count() > MAX_NAME_LENGTH {
            return Err(ElbDomainError::LoadBalancerNameTooLong(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LoadBalancerName {
    type Error = ElbDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LoadBalancerName> for String {
    fn from(name: LoadBalancerName) -> Self {
        name.0
    }
}

impl AsRef<str> for LoadBalancerName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LoadBalancerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
