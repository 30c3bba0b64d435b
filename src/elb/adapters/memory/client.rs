//! In-memory model of the classic load balancer API.

use crate::elb::{
    domain::{ElbTag, LoadBalancerName, TagDescription},
    ports::{ElbClient, ElbClientError, ElbClientResult, LoadBalancerPage},
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Client operations that can be observed or made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElbOperation {
    /// The paged enumeration call.
    DescribeLoadBalancers,
    /// The batched tag lookup.
    DescribeTags,
    /// The delete call.
    DeleteLoadBalancer,
}

/// A call received by [`InMemoryElbClient`], with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElbCall {
    /// Enumeration starting at `marker`.
    DescribeLoadBalancers {
        /// Marker passed by the caller.
        marker: Option<String>,
    },
    /// Tag lookup for `names`.
    DescribeTags {
        /// Names passed by the caller, in order.
        names: Vec<LoadBalancerName>,
    },
    /// Deletion of `name`.
    DeleteLoadBalancer {
        /// Name passed by the caller.
        name: LoadBalancerName,
    },
}

impl ElbCall {
    /// Returns the operation this call invoked.
    #[must_use]
    pub const fn operation(&self) -> ElbOperation {
        match self {
            Self::DescribeLoadBalancers { .. } => ElbOperation::DescribeLoadBalancers,
            Self::DescribeTags { .. } => ElbOperation::DescribeTags,
            Self::DeleteLoadBalancer { .. } => ElbOperation::DeleteLoadBalancer,
        }
    }
}

/// In-memory load balancer API.
///
/// Load balancers are served in insertion order. Like the real provider, a
/// tag lookup with no names is rejected, a tag lookup naming an unknown load
/// balancer fails, and deleting an unknown load balancer succeeds. Every call
/// is recorded so tests can assert on the exact call sequence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryElbClient {
    state: Arc<RwLock<InMemoryElbState>>,
}

#[derive(Debug, Default)]
struct InMemoryElbState {
    load_balancers: Vec<(LoadBalancerName, Vec<ElbTag>)>,
    page_size: Option<NonZeroUsize>,
    tag_batch_limit: Option<NonZeroUsize>,
    hidden_tags: HashSet<LoadBalancerName>,
    failures: HashMap<ElbOperation, ElbClientError>,
    calls: Vec<ElbCall>,
}

impl InMemoryElbState {
    fn position(&self, name: &LoadBalancerName) -> Option<usize> {
        self.load_balancers
            .iter()
            .position(|(existing, _)| existing == name)
    }

    fn injected_failure(&self, operation: ElbOperation) -> ElbClientResult<()> {
        self.failures.get(&operation).cloned().map_or(Ok(()), Err)
    }
}

impl InMemoryElbClient {
    /// Creates an empty client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ElbClientResult<RwLockReadGuard<'_, InMemoryElbState>> {
        self.state
            .read()
            .map_err(|err| ElbClientError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> ElbClientResult<RwLockWriteGuard<'_, InMemoryElbState>> {
        self.state
            .write()
            .map_err(|err| ElbClientError::transport(std::io::Error::other(err.to_string())))
    }

    /// Adds a load balancer with its tags.
    ///
    /// An existing load balancer with the same name has its tags replaced and
    /// keeps its position.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn add_load_balancer(
        &self,
        name: LoadBalancerName,
        tags: impl IntoIterator<Item = ElbTag>,
    ) -> ElbClientResult<()> {
        let mut state = self.write()?;
        let collected: Vec<ElbTag> = tags.into_iter().collect();
        match state.position(&name) {
            Some(index) => {
                if let Some(entry) = state.load_balancers.get_mut(index) {
                    entry.1 = collected;
                }
            }
            None => state.load_balancers.push((name, collected)),
        }
        Ok(())
    }

    /// Limits how many load balancers one enumeration page returns.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn set_page_size(&self, page_size: NonZeroUsize) -> ElbClientResult<()> {
        self.write()?.page_size = Some(page_size);
        Ok(())
    }

    /// Rejects tag lookups naming more than `limit` load balancers.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn set_tag_batch_limit(&self, limit: NonZeroUsize) -> ElbClientResult<()> {
        self.write()?.tag_batch_limit = Some(limit);
        Ok(())
    }

    /// Leaves `name` out of tag responses while still enumerating it.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn hide_tags(&self, name: LoadBalancerName) -> ElbClientResult<()> {
        self.write()?.hidden_tags.insert(name);
        Ok(())
    }

    /// Makes every subsequent call of `operation` fail with `error`.
    ///
    /// Failing calls are still recorded.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn fail_with(&self, operation: ElbOperation, error: ElbClientError) -> ElbClientResult<()> {
        self.write()?.failures.insert(operation, error);
        Ok(())
    }

    /// Removes an injected failure for `operation`.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn clear_failure(&self, operation: ElbOperation) -> ElbClientResult<()> {
        self.write()?.failures.remove(&operation);
        Ok(())
    }

    /// Returns the names of the load balancers that currently exist.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn load_balancer_names(&self) -> ElbClientResult<Vec<LoadBalancerName>> {
        let state = self.read()?;
        Ok(state
            .load_balancers
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    /// Returns every call received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn calls(&self) -> ElbClientResult<Vec<ElbCall>> {
        Ok(self.read()?.calls.clone())
    }

    /// Returns how many calls of `operation` were received.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn call_count(&self, operation: ElbOperation) -> ElbClientResult<usize> {
        let state = self.read()?;
        Ok(state
            .calls
            .iter()
            .filter(|call| call.operation() == operation)
            .count())
    }
}

fn parse_marker(marker: Option<&str>) -> ElbClientResult<usize> {
    marker.map_or(Ok(0), |raw| {
        raw.parse()
            .map_err(|_| ElbClientError::InvalidRequest(format!("invalid marker: {raw}")))
    })
}

#[async_trait]
impl ElbClient for InMemoryElbClient {
    async fn describe_load_balancers(
        &self,
        marker: Option<String>,
    ) -> ElbClientResult<LoadBalancerPage> {
        let mut state = self.write()?;
        state.calls.push(ElbCall::DescribeLoadBalancers {
            marker: marker.clone(),
        });
        state.injected_failure(ElbOperation::DescribeLoadBalancers)?;

        let total = state.load_balancers.len();
        let start = parse_marker(marker.as_deref())?.min(total);
        let end = state
            .page_size
            .map_or(total, |size| start.saturating_add(size.get()).min(total));

        let load_balancers = state
            .load_balancers
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|(name, _)| name.clone())
            .collect();
        let next_marker = (end < total).then(|| end.to_string());

        Ok(LoadBalancerPage {
            load_balancers,
            next_marker,
        })
    }

    async fn describe_tags(
        &self,
        names: &[LoadBalancerName],
    ) -> ElbClientResult<Vec<TagDescription>> {
        let mut state = self.write()?;
        state.calls.push(ElbCall::DescribeTags {
            names: names.to_vec(),
        });
        state.injected_failure(ElbOperation::DescribeTags)?;

        if names.is_empty() {
            return Err(ElbClientError::InvalidRequest(
                "at least one load balancer name is required".to_owned(),
            ));
        }
        if let Some(limit) = state.tag_batch_limit
            && names.len() > limit.get()
        {
            return Err(ElbClientError::InvalidRequest(format!(
                "at most {limit} load balancer names are allowed, got {}",
                names.len()
            )));
        }

        let mut descriptions = Vec::with_capacity(names.len());
        for name in names {
            let (_, tags) = state
                .load_balancers
                .iter()
                .find(|(existing, _)| existing == name)
                .ok_or_else(|| ElbClientError::LoadBalancerNotFound(name.clone()))?;
            if state.hidden_tags.contains(name) {
                continue;
            }
            descriptions.push(TagDescription::new(name.clone(), tags.iter().cloned()));
        }
        Ok(descriptions)
    }

    async fn delete_load_balancer(&self, name: &LoadBalancerName) -> ElbClientResult<()> {
        let mut state = self.write()?;
        state.calls.push(ElbCall::DeleteLoadBalancer { name: name.clone() });
        state.injected_failure(ElbOperation::DeleteLoadBalancer)?;

        if let Some(index) = state.position(name) {
            state.load_balancers.remove(index);
            state.hidden_tags.remove(name);
        }
        Ok(())
    }
}
