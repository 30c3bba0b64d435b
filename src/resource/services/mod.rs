//! Application services for resource category registration and discovery.

mod registry;

pub use registry::{RegistryError, RegistryResult, ResourceRegistry};
