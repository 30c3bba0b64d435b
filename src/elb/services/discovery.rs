//! Two-phase discovery of classic load balancers.
//!
//! Phase one pages through the enumeration call and collects every name.
//! Phase two asks for the tags of those names, because the enumeration does
//! not carry them, and the tag response drives which handles are built.

use crate::elb::{
    domain::{ElbDiscoveryConfig, LoadBalancerName, MissingTagPolicy, TagDescription},
    ports::{ElbClient, ElbClientError, ElbClientResult, ElbSession},
    services::ElbLoadBalancer,
};
use crate::resource::{
    domain::ResourceTypeName,
    ports::{Resource, ResourceError, ResourceLister, ResourceResult},
    services::ResourceRegistry,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Registry key of the classic load balancer category.
pub const ELB_RESOURCE_TYPE: &str = "ELB";

/// Registers the load balancer lister with the default configuration.
///
/// Installing twice is a no-op.
pub fn install<S>(registry: &mut ResourceRegistry<S>)
where
    S: ElbSession,
{
    install_with_config(registry, ElbDiscoveryConfig::default());
}

/// Registers the load balancer lister with `config`.
///
/// When the category is already registered the existing lister is kept.
pub fn install_with_config<S>(registry: &mut ResourceRegistry<S>, config: ElbDiscoveryConfig)
where
    S: ElbSession,
{
    registry.register(
        ResourceTypeName::from_static(ELB_RESOURCE_TYPE),
        ElbLoadBalancerLister::new(config),
    );
}

/// [`ResourceLister`] for classic load balancers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElbLoadBalancerLister {
    config: ElbDiscoveryConfig,
}

impl ElbLoadBalancerLister {
    /// Creates a lister using `config`.
    #[must_use]
    pub const fn new(config: ElbDiscoveryConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl<S> ResourceLister<S> for ElbLoadBalancerLister
where
    S: ElbSession,
{
    async fn list(&self, session: &S) -> ResourceResult<Vec<Box<dyn Resource>>> {
        let client = session.elb_client();
        let load_balancers = discover_load_balancers(&client, &self.config)
            .await
            .map_err(ResourceError::new)?;
        Ok(load_balancers
            .into_iter()
            .map(|load_balancer| Box::new(load_balancer) as Box<dyn Resource>)
            .collect())
    }
}

/// Enumerates every load balancer visible to `client` and attaches its tags.
///
/// The result follows the order of the tag response. Names missing from the
/// tag response are handled according to
/// [`ElbDiscoveryConfig::missing_tags`]. When the enumeration is empty the
/// tag lookup is skipped, since the provider rejects an empty name list.
///
/// # Errors
///
/// Returns the first client error unchanged. No partial result is returned.
/// A paging marker the provider already handed out fails with
/// [`ElbClientError::InvalidRequest`].
pub async fn discover_load_balancers(
    client: &Arc<dyn ElbClient>,
    config: &ElbDiscoveryConfig,
) -> ElbClientResult<Vec<ElbLoadBalancer>> {
    let names = describe_all_load_balancers(client.as_ref()).await?;
    if names.is_empty() {
        tracing::debug!("no load balancers found, skipping tag lookup");
        return Ok(Vec::new());
    }

    let descriptions =
        describe_tags_in_batches(client.as_ref(), &names, config.tag_batch_limit()).await?;
    let load_balancers = assemble(client, &names, descriptions, config.missing_tags());

    tracing::info!(
        enumerated = names.len(),
        discovered = load_balancers.len(),
        "discovered load balancers"
    );
    Ok(load_balancers)
}

async fn describe_all_load_balancers(
    client: &dyn ElbClient,
) -> ElbClientResult<Vec<LoadBalancerName>> {
    let mut names = Vec::new();
    let mut seen_markers = HashSet::new();
    let mut marker = None;
    loop {
        let page = client.describe_load_balancers(marker).await?;
        tracing::debug!(count = page.load_balancers.len(), "described load balancer page");
        names.extend(page.load_balancers);
        let Some(next) = page.next_marker.filter(|raw| !raw.is_empty()) else {
            return Ok(names);
        };
        if !seen_markers.insert(next.clone()) {
            tracing::warn!(marker = %next, "paging marker repeated, aborting enumeration");
            return Err(ElbClientError::InvalidRequest(format!(
                "paging marker repeated: {next}"
            )));
        }
        marker = Some(next);
    }
}

async fn describe_tags_in_batches(
    client: &dyn ElbClient,
    names: &[LoadBalancerName],
    limit: Option<NonZeroUsize>,
) -> ElbClientResult<Vec<TagDescription>> {
    let batch_size = limit.map_or(names.len(), NonZeroUsize::get).max(1);
    let mut descriptions = Vec::with_capacity(names.len());
    for batch in names.chunks(batch_size) {
        tracing::debug!(count = batch.len(), "describing load balancer tags");
        descriptions.extend(client.describe_tags(batch).await?);
    }
    Ok(descriptions)
}

fn assemble(
    client: &Arc<dyn ElbClient>,
    names: &[LoadBalancerName],
    descriptions: Vec<TagDescription>,
    policy: MissingTagPolicy,
) -> Vec<ElbLoadBalancer> {
    let described: HashSet<LoadBalancerName> = descriptions
        .iter()
        .map(|description| description.load_balancer_name.clone())
        .collect();

    let mut load_balancers: Vec<ElbLoadBalancer> = descriptions
        .into_iter()
        .map(|description| {
            ElbLoadBalancer::new(
                Arc::clone(client),
                description.load_balancer_name,
                description.tags,
            )
        })
        .collect();

    for name in names.iter().filter(|name| !described.contains(*name)) {
        match policy {
            MissingTagPolicy::Exclude => {
                tracing::warn!(load_balancer = %name, "no tags returned, excluding load balancer");
            }
            MissingTagPolicy::Untagged => {
                tracing::warn!(load_balancer = %name, "no tags returned, listing load balancer untagged");
                load_balancers.push(ElbLoadBalancer::new(
                    Arc::clone(client),
                    name.clone(),
                    Vec::new(),
                ));
            }
        }
    }

    load_balancers
}
