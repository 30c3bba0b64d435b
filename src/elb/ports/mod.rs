//! Port contracts for talking to the load balancer API.

mod client;

pub use client::{ElbClient, ElbClientError, ElbClientResult, ElbSession, LoadBalancerPage};

#[cfg(test)]
pub use client::MockElbClient;
