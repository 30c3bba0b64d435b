//! Provider-agnostic resource contract for the cleanup orchestrator.
//!
//! Every discovery adapter yields handles that satisfy the same capability
//! set: a display label, a property view built from provider tags, and a
//! delete operation. Adapters plug into an explicit [`ResourceRegistry`]
//! keyed by category name. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]
//!
//! [`ResourceRegistry`]: services::ResourceRegistry

pub mod domain;
pub mod ports;
pub mod services;
