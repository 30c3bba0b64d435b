//! Shared test helpers for in-memory integration tests.

use cloudsweep::elb::{
    self,
    adapters::memory::InMemoryElbClient,
    domain::{ElbTag, LoadBalancerName},
};
use cloudsweep::resource::{domain::ResourceTypeName, services::ResourceRegistry};
use rstest::fixture;
use std::sync::Arc;

/// Session type used by the in-memory tests: the client is its own session.
pub type TestSession = Arc<InMemoryElbClient>;

/// Installs a test subscriber so adapter logs show up with `RUST_LOG`.
pub fn init_tracing() {
    // An earlier test in the same binary may already have installed one.
    drop(
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init(),
    );
}

/// Provides a fresh, empty in-memory client.
#[fixture]
pub fn session() -> TestSession {
    init_tracing();
    Arc::new(InMemoryElbClient::new())
}

/// Provides a registry with the load balancer adapter installed.
#[fixture]
pub fn registry() -> ResourceRegistry<TestSession> {
    let mut registry = ResourceRegistry::new();
    elb::install(&mut registry);
    registry
}

/// Returns the registry key of the load balancer category.
#[must_use]
pub fn elb_type() -> ResourceTypeName {
    ResourceTypeName::new(elb::ELB_RESOURCE_TYPE).expect("valid resource type")
}

/// Builds a load balancer name, panicking on invalid test input.
#[must_use]
pub fn lb(raw: &str) -> LoadBalancerName {
    LoadBalancerName::new(raw).expect("valid load balancer name")
}

/// Adds load balancers with tags to `session`, in order.
pub fn seed(session: &TestSession, load_balancers: &[(&str, &[(&str, &str)])]) {
    for (name, tags) in load_balancers {
        session
            .add_load_balancer(
                lb(name),
                tags.iter().map(|(key, value)| ElbTag::new(*key, *value)),
            )
            .expect("seed load balancer");
    }
}

/// Seeds `count` untagged load balancers named `lb-0`, `lb-1`, and so on.
pub fn seed_numbered(session: &TestSession, count: usize) {
    for index in 0..count {
        session
            .add_load_balancer(lb(&format!("lb-{index}")), Vec::new())
            .expect("seed load balancer");
    }
}
