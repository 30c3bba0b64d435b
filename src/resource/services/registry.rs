//! Explicit registry from category name to discovery adapter.
//!
//! The orchestrator builds one [`ResourceRegistry`] at startup and lets each
//! adapter install itself. There is no process-wide state: the registry
//! lives as long as its owner.

use crate::resource::{
    domain::ResourceTypeName,
    ports::{Resource, ResourceError, ResourceLister},
};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by registry lookups.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// No adapter is registered under the requested name.
    #[error("unknown resource type: {0}")]
    UnknownResourceType(ResourceTypeName),

    /// The adapter failed while listing its category.
    #[error("listing {resource_type} failed")]
    Listing {
        /// Category whose lister failed.
        resource_type: ResourceTypeName,
        /// Adapter error, unchanged.
        #[source]
        source: ResourceError,
    },
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Index of discovery adapters keyed by category name.
pub struct ResourceRegistry<S> {
    listers: BTreeMap<ResourceTypeName, Arc<dyn ResourceLister<S>>>,
}

impl<S> ResourceRegistry<S> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            listers: BTreeMap::new(),
        }
    }

    /// Registers `lister` under `name`.
    ///
    /// The first registration of a name wins; later registrations under the
    /// same name are ignored, which makes adapter installation idempotent.
    pub fn register(&mut self, name: ResourceTypeName, lister: impl ResourceLister<S> + 'static) {
        if self.listers.contains_key(&name) {
            tracing::debug!(resource_type = %name, "resource type already registered");
            return;
        }
        tracing::debug!(resource_type = %name, "registered resource type");
        self.listers.insert(name, Arc::new(lister));
    }

    /// Returns the lister registered under `name`.
    #[must_use]
    pub fn get(&self, name: &ResourceTypeName) -> Option<Arc<dyn ResourceLister<S>>> {
        self.listers.get(name).cloned()
    }

    /// Returns `true` when an adapter is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &ResourceTypeName) -> bool {
        self.listers.contains_key(name)
    }

    /// Returns all registered category names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &ResourceTypeName> {
        self.listers.keys()
    }

    /// Returns the number of registered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listers.len()
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listers.is_empty()
    }

    /// Lists every object of category `name` visible to `session`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownResourceType`] when no adapter is
    /// registered under `name`, or [`RegistryError::Listing`] carrying the
    /// adapter error unchanged.
    pub async fn list(
        &self,
        name: &ResourceTypeName,
        session: &S,
    ) -> RegistryResult<Vec<Box<dyn Resource>>> {
        let lister = self
            .listers
            .get(name)
            .ok_or_else(|| RegistryError::UnknownResourceType(name.clone()))?;

        let resources = lister
            .list(session)
            .await
            .map_err(|source| RegistryError::Listing {
                resource_type: name.clone(),
                source,
            })?;

        tracing::info!(resource_type = %name, count = resources.len(), "listed resources");
        Ok(resources)
    }
}

impl<S> Default for ResourceRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for ResourceRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRegistry")
            .field("resource_types", &self.listers.keys().collect::<Vec<_>>())
            .finish()
    }
}
