//! Port contracts between the orchestrator and discovery adapters.
//!
//! Adapters implement [`ResourceLister`] to enumerate one category and
//! return heterogeneous [`Resource`] handles the orchestrator can act on
//! without knowing the concrete category.

mod lister;
mod resource;

pub use lister::ResourceLister;
pub use resource::{Resource, ResourceError, ResourceResult};
