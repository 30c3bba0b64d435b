//! Resource handle for one discovered load balancer.

use crate::elb::{
    domain::{ElbTag, LoadBalancerName},
    ports::{ElbClient, ElbClientResult},
};
use crate::resource::{
    domain::Properties,
    ports::{Resource, ResourceError, ResourceResult},
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// A classic load balancer as seen at discovery time.
///
/// The tag snapshot is never refreshed. After [`Resource::remove`] the handle
/// still reports the name and tags it was created with.
pub struct ElbLoadBalancer {
    client: Arc<dyn ElbClient>,
    name: LoadBalancerName,
    tags: Vec<ElbTag>,
}

impl ElbLoadBalancer {
    pub(crate) const fn new(
        client: Arc<dyn ElbClient>,
        name: LoadBalancerName,
        tags: Vec<ElbTag>,
    ) -> Self {
        Self { client, name, tags }
    }

    /// Returns the load balancer name.
    #[must_use]
    pub const fn name(&self) -> &LoadBalancerName {
        &self.name
    }

    /// Returns the tags captured at discovery time, in provider order.
    #[must_use]
    pub fn tags(&self) -> &[ElbTag] {
        &self.tags
    }

    /// Issues the delete call for this load balancer.
    ///
    /// # Errors
    ///
    /// Returns the client error unchanged; nothing is retried.
    pub async fn delete(&self) -> ElbClientResult<()> {
        tracing::debug!(load_balancer = %self.name, "deleting load balancer");
        self.client.delete_load_balancer(&self.name).await?;
        tracing::info!(load_balancer = %self.name, "load balancer deletion requested");
        Ok(())
    }
}

#[async_trait]
impl Resource for ElbLoadBalancer {
    async fn remove(&self) -> ResourceResult<()> {
        self.delete().await.map_err(ResourceError::new)
    }

    fn properties(&self) -> Properties {
        let mut properties = Properties::new();
        for tag in &self.tags {
            properties.set_tag(tag.key(), tag.value());
        }
        properties
    }
}

impl fmt::Display for ElbLoadBalancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

impl fmt::Debug for ElbLoadBalancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElbLoadBalancer")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
