//! Capability interface implemented by every discovered resource handle.

use crate::resource::domain::Properties;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for resource handle and lister operations.
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Uniform handle over one discovered cloud object.
///
/// The [`fmt::Display`] output is the label the orchestrator shows, logs,
/// and matches filter rules against. It must be stable for the lifetime of
/// the handle.
#[async_trait]
pub trait Resource: fmt::Display + Send + Sync {
    /// Asks the provider to delete the underlying object.
    ///
    /// Success means the provider accepted the request; deletion may still
    /// be in progress. The handle keeps reporting its captured state
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns the provider error unchanged, wrapped in a transparent
    /// [`ResourceError`].
    async fn remove(&self) -> ResourceResult<()>;

    /// Returns the property view captured at discovery time.
    fn properties(&self) -> Properties;
}

impl fmt::Debug for dyn Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Resource").field(&self.to_string()).finish()
    }
}

/// Error surfaced by resource handles and listers.
///
/// The wrapper is transparent: its `Display` and `source` are those of the
/// adapter error it carries, and [`ResourceError::downcast_ref`] recovers
/// the original value.
#[derive(Debug, Clone, Error)]
#[error(transparent)]
pub struct ResourceError(Arc<dyn std::error::Error + Send + Sync>);

impl ResourceError {
    /// Wraps an adapter error without altering it.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }

    /// Returns the wrapped error as `E` when it has that concrete type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.0.downcast_ref::<E>()
    }
}
