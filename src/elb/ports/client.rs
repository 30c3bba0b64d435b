//! Client port for the classic load balancer API.

use crate::elb::domain::{LoadBalancerName, TagDescription};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for load balancer client operations.
pub type ElbClientResult<T> = Result<T, ElbClientError>;

/// One page of the load balancer enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadBalancerPage {
    /// Load balancer names on this page, in provider order.
    pub load_balancers: Vec<LoadBalancerName>,
    /// Marker for the next page; `None` on the last page.
    pub next_marker: Option<String>,
}

/// Calls the discovery adapter issues against the provider.
///
/// Implementations are already bound to an account and region.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ElbClient: Send + Sync {
    /// Returns one page of load balancers, starting at `marker` or at the
    /// beginning when `marker` is `None`.
    async fn describe_load_balancers(
        &self,
        marker: Option<String>,
    ) -> ElbClientResult<LoadBalancerPage>;

    /// Returns tags for the given load balancers.
    ///
    /// The provider rejects an empty `names` list.
    async fn describe_tags(
        &self,
        names: &[LoadBalancerName],
    ) -> ElbClientResult<Vec<TagDescription>>;

    /// Requests deletion of a load balancer.
    async fn delete_load_balancer(&self, name: &LoadBalancerName) -> ElbClientResult<()>;
}

/// Authenticated session able to produce a load balancer client.
pub trait ElbSession: Send + Sync {
    /// Returns a client bound to the session's account and region.
    fn elb_client(&self) -> Arc<dyn ElbClient>;
}

impl<C> ElbSession for Arc<C>
where
    C: ElbClient + 'static,
{
    fn elb_client(&self) -> Arc<dyn ElbClient> {
        Self::clone(self)
    }
}

/// Errors returned by load balancer client implementations.
#[derive(Debug, Clone, Error)]
pub enum ElbClientError {
    /// The named load balancer does not exist.
    #[error("load balancer not found: {0}")]
    LoadBalancerNotFound(LoadBalancerName),

    /// The credentials lack permission for the call.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// The provider throttled the call.
    #[error("request throttled: {operation}")]
    Throttled {
        /// Name of the throttled operation.
        operation: String,
    },

    /// The provider rejected the request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The load balancer is still referenced by another resource.
    #[error("dependency violation: {0}")]
    DependencyViolation(String),

    /// Network or protocol failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ElbClientError {
    /// Wraps a network or protocol error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Creates a throttling error for `operation`.
    pub fn throttled(operation: impl Into<String>) -> Self {
        Self::Throttled {
            operation: operation.into(),
        }
    }
}
