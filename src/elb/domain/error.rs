//! Error types for load balancer domain validation.

use thiserror::Error;

/// Errors returned while constructing load balancer domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ElbDomainError {
    /// The load balancer name is empty or only whitespace.
    #[error("load balancer name must not be empty")]
    EmptyLoadBalancerName,

    /// The load balancer name exceeds the provider's 32-character limit.
    #[error("load balancer name exceeds 32 character limit: {0}")]
    LoadBalancerNameTooLong(String),

    /// The load balancer name has leading or trailing whitespace.
    #[error("load balancer name has surrounding whitespace: {0:?}")]
    SurroundingWhitespace(String),
}
