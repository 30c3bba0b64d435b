//! Discovery port implemented once per resource category.

use super::{Resource, ResourceResult};
use async_trait::async_trait;

/// Enumerates every object of one resource category.
///
/// `S` is the authenticated session the orchestrator resolved for the
/// target account and region. Listers always return the full set; filtering
/// belongs to the orchestrator.
#[async_trait]
pub trait ResourceLister<S>: Send + Sync {
    /// Lists all objects of the category visible to `session`.
    ///
    /// # Errors
    ///
    /// Returns the first adapter failure unchanged. No partial results are
    /// produced.
    async fn list(&self, session: &S) -> ResourceResult<Vec<Box<dyn Resource>>>;
}
