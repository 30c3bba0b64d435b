//! Domain model shared by every resource category.
//!
//! Category names identify adapters in the registry, and [`Properties`]
//! carries the tag snapshot the orchestrator filters on. Neither type knows
//! anything about a particular cloud provider.

mod error;
mod name;
mod properties;

pub use error::ResourceDomainError;
pub use name::ResourceTypeName;
pub use properties::{Properties, Property, PropertyKey};
