//! Discovery tuning for the load balancer adapter.

use std::num::NonZeroUsize;

/// Largest number of names the provider accepts in one tag lookup.
pub const AWS_DESCRIBE_TAGS_LIMIT: usize = 20;

/// What discovery does with a load balancer the tag lookup did not mention.
///
/// The enumeration and the tag lookup are separate calls, so a load balancer
/// deleted in between, or silently dropped by the provider, can be missing
/// from the tag response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingTagPolicy {
    /// Leave the load balancer out of the result.
    #[default]
    Exclude,
    /// Report the load balancer with an empty tag set.
    Untagged,
}

/// Settings for one discovery pass.
///
/// # Examples
///
/// ```
/// use cloudsweep::elb::domain::{ElbDiscoveryConfig, MissingTagPolicy};
///
/// let config = ElbDiscoveryConfig::default();
/// assert!(config.tag_batch_limit().is_none());
/// assert_eq!(config.missing_tags(), MissingTagPolicy::Exclude);
///
/// let bounded = ElbDiscoveryConfig::aws_limits();
/// assert_eq!(bounded.tag_batch_limit().map(|limit| limit.get()), Some(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElbDiscoveryConfig {
    tag_batch_limit: Option<NonZeroUsize>,
    missing_tags: MissingTagPolicy,
}

impl ElbDiscoveryConfig {
    /// Creates the default configuration: one tag lookup for all names and
    /// missing tag descriptions excluded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tag_batch_limit: None,
            missing_tags: MissingTagPolicy::Exclude,
        }
    }

    /// Creates a configuration that splits tag lookups at the provider's
    /// per-call name limit.
    #[must_use]
    pub const fn aws_limits() -> Self {
        Self {
            tag_batch_limit: NonZeroUsize::new(AWS_DESCRIBE_TAGS_LIMIT),
            missing_tags: MissingTagPolicy::Exclude,
        }
    }

    /// Sets the maximum number of names per tag lookup.
    #[must_use]
    pub const fn with_tag_batch_limit(mut self, limit: NonZeroUsize) -> Self {
        self.tag_batch_limit = Some(limit);
        self
    }

    /// Sets the policy for load balancers missing from the tag response.
    #[must_use]
    pub const fn with_missing_tags(mut self, policy: MissingTagPolicy) -> Self {
        self.missing_tags = policy;
        self
    }

    /// Returns the maximum number of names per tag lookup, if bounded.
    #[must_use]
    pub const fn tag_batch_limit(&self) -> Option<NonZeroUsize> {
        self.tag_batch_limit
    }

    /// Returns the policy for load balancers missing from the tag response.
    #[must_use]
    pub const fn missing_tags(&self) -> MissingTagPolicy {
        self.missing_tags
    }
}
