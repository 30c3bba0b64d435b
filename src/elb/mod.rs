//! Classic elastic load balancer discovery adapter.
//!
//! The provider's listing call does not return tags, so discovery runs in
//! two phases: enumerate every load balancer name, then fetch tags for those
//! names in a separate batched call and zip the results into
//! [`ElbLoadBalancer`] handles. The adapter installs itself into a
//! [`ResourceRegistry`] under [`ELB_RESOURCE_TYPE`]. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Discovery services in [`services`]
//!
//! [`ElbLoadBalancer`]: services::ElbLoadBalancer
//! [`ResourceRegistry`]: crate::resource::services::ResourceRegistry
//! [`ELB_RESOURCE_TYPE`]: services::ELB_RESOURCE_TYPE

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

pub use services::{ELB_RESOURCE_TYPE, install, install_with_config};

#[cfg(test)]
mod tests;
