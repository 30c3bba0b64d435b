//! Domain model for classic load balancer discovery.
//!
//! These types describe what the provider reports about a load balancer and
//! how discovery is tuned. They carry no client handles.

mod config;
mod error;
mod name;
mod tag;

pub use config::{AWS_DESCRIBE_TAGS_LIMIT, ElbDiscoveryConfig, MissingTagPolicy};
pub use error::ElbDomainError;
pub use name::LoadBalancerName;
pub use tag::{ElbTag, TagDescription};
