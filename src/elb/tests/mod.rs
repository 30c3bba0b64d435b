//! Unit tests for the load balancer discovery adapter.


use crate::elb::domain::{ElbTag, LoadBalancerName};

/// Builds a load balancer name, panicking on invalid test input.
fn lb(raw: &str) -> LoadBalancerName {
    LoadBalancerName::new(raw).expect("valid load balancer name")
}

/// Builds a tag list from `(key, value)` pairs.
fn tags(pairs: &[(&str, &str)]) -> Vec<ElbTag> {
    pairs
        .iter()
        .map(|(key, value)| ElbTag::new(*key, *value))
        .collect()
}
