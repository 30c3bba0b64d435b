//! Cloudsweep: resource discovery adapters for a cloud cleanup tool.
//!
//! The orchestrator of a cleanup run needs every resource category to look
//! the same: list everything, show a label, expose tags, delete on request.
//! This crate provides that contract and the adapters that fulfil it.
//!
//! # Architecture
//!
//! Cloudsweep follows hexagonal architecture principles:
//!
//! - **Domain**: validated names, tags and property views
//! - **Ports**: trait interfaces for provider clients and resource handles
//! - **Adapters**: concrete client implementations (in-memory for tests)
//! - **Services**: discovery pipelines and the category registry
//!
//! # Modules
//!
//! - [`resource`]: provider-agnostic resource contract and registry
//! - [`elb`]: classic load balancer discovery
//!
//! # Examples
//!
//! ```
//! use cloudsweep::elb::{self, adapters::memory::InMemoryElbClient};
//! use cloudsweep::resource::{domain::ResourceTypeName, services::ResourceRegistry};
//! use std::sync::Arc;
//!
//! let mut registry: ResourceRegistry<Arc<InMemoryElbClient>> = ResourceRegistry::new();
//! elb::install(&mut registry);
//!
//! let name = ResourceTypeName::new(elb::ELB_RESOURCE_TYPE).expect("valid name");
//! assert!(registry.contains(&name));
//! ```

pub mod elb;
pub mod resource;
