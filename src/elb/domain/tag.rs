//! Tag types returned by the tag lookup call.

use super::LoadBalancerName;
use serde::{Deserialize, Serialize};

/// A key/value tag attached to a load balancer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElbTag {
    key: String,
    value: String,
}

impl ElbTag {
    /// Creates a tag from its key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the tag key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the tag value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Tags the provider reported for one load balancer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDescription {
    /// Load balancer the tags belong to.
    pub load_balancer_name: LoadBalancerName,
    /// Tags in provider order, duplicates included.
    pub tags: Vec<ElbTag>,
}

impl TagDescription {
    /// Creates a tag description.
    #[must_use]
    pub fn new(load_balancer_name: LoadBalancerName, tags: impl IntoIterator<Item = ElbTag>) -> Self {
        Self {
            load_balancer_name,
            tags: tags.into_iter().collect(),
        }
    }
}
