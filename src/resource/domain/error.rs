//! Error types for resource domain validation.

use thiserror::Error;

/// Errors returned while constructing resource domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResourceDomainError {
    /// The resource type name is empty after trimming.
    #[error("resource type name must not be empty")]
    EmptyResourceTypeName,

    /// The resource type name contains characters outside `[A-Za-z0-9]`.
    #[error(
        "resource type name '{0}' contains invalid characters (only ASCII alphanumerics allowed)"
    )]
    InvalidResourceTypeName(String),

    /// The resource type name exceeds the 64-character limit.
    #[error("resource type name exceeds 64 character limit: {0}")]
    ResourceTypeNameTooLong(String),
}
