//! Shared world state for load balancer discovery BDD scenarios.

use std::sync::Arc;

use cloudsweep::elb::{self, adapters::memory::InMemoryElbClient, domain::LoadBalancerName};
use cloudsweep::resource::{
    domain::ResourceTypeName,
    ports::Resource,
    services::{RegistryError, ResourceRegistry},
};
use rstest::fixture;

/// Session type used by the BDD world.
pub type TestSession = Arc<InMemoryElbClient>;

/// Scenario world for load balancer discovery behaviour tests.
pub struct ElbWorld {
    /// Provider double shared with discovered handles.
    pub session: TestSession,
    /// Registry the scenario lists through.
    pub registry: ResourceRegistry<TestSession>,
    /// Result of the last listing.
    pub last_listing: Option<Result<Vec<Box<dyn Resource>>, RegistryError>>,
}

impl ElbWorld {
    /// Creates a world with an empty provider and the default installation.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = ResourceRegistry::new();
        elb::install(&mut registry);
        Self {
            session: Arc::new(InMemoryElbClient::new()),
            registry,
            last_listing: None,
        }
    }

    /// Returns the resources from the last successful listing.
    pub fn listed(&self) -> Result<&[Box<dyn Resource>], eyre::Report> {
        match self.last_listing.as_ref() {
            Some(Ok(resources)) => Ok(resources),
            Some(Err(err)) => Err(eyre::eyre!("listing failed: {err}")),
            None => Err(eyre::eyre!("no listing in scenario world")),
        }
    }
}

impl Default for ElbWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ElbWorld {
    ElbWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Returns the registry key of the load balancer category.
pub fn elb_type() -> Result<ResourceTypeName, eyre::Report> {
    ResourceTypeName::new(elb::ELB_RESOURCE_TYPE).map_err(|err| eyre::eyre!("{err}"))
}

/// Parses a load balancer name from step text.
pub fn lb(raw: &str) -> Result<LoadBalancerName, eyre::Report> {
    LoadBalancerName::new(raw).map_err(|err| eyre::eyre!("invalid load balancer name: {err}"))
}
