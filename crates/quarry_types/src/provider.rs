//! Resource schema providers.
//!
//! The semantic layer never loads schemas itself. It asks a
//! [`ResourceTypeProvider`] for the type of a reference at a target scope and
//! treats the answer as authoritative.

use std::collections::HashMap;

use parking_lot::RwLock;
use quarry_foundation::{Error, Result};
use tracing::trace;

use crate::reference::{ResourceScope, ResourceTypeReference};
use crate::symbol::{ResourceType, TypeSymbol};

/// Supplies resource schemas.
///
/// Implementations are shared across binder threads, so they must be
/// `Send + Sync`.
pub trait ResourceTypeProvider: Send + Sync {
    /// Returns the type of `reference` when deployed at `scope`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownResourceType` if no schema exists, or `UnsupportedScope`
    /// if the schema exists but not at `scope`.
    fn get_type(&self, scope: ResourceScope, reference: &ResourceTypeReference) -> Result<ResourceType>;
}

impl<P: ResourceTypeProvider + ?Sized> ResourceTypeProvider for &P {
    fn get_type(&self, scope: ResourceScope, reference: &ResourceTypeReference) -> Result<ResourceType> {
        (**self).get_type(scope, reference)
    }
}

impl<P: ResourceTypeProvider + ?Sized> ResourceTypeProvider for std::sync::Arc<P> {
    fn get_type(&self, scope: ResourceScope, reference: &ResourceTypeReference) -> Result<ResourceType> {
        (**self).get_type(scope, reference)
    }
}

// =============================================================================
// In-Memory Provider
// =============================================================================

#[derive(Clone, Debug)]
struct Registration {
    body: TypeSymbol,
    scopes: Vec<ResourceScope>,
}

/// A provider backed by schemas registered at runtime.
///
/// Lookups ignore the case of the reference. The returned type keeps the
/// spelling the caller asked for.
#[derive(Clone, Debug, Default)]
pub struct InMemoryTypeProvider {
    schemas: HashMap<ResourceTypeReference, Registration>,
}

impl InMemoryTypeProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `body` for `reference` at every scope.
    pub fn register(&mut self, reference: ResourceTypeReference, body: TypeSymbol) {
        self.register_at(reference, body, ResourceScope::ALL);
    }

    /// Registers `body` for `reference` at the given scopes only.
    pub fn register_at(
        &mut self,
        reference: ResourceTypeReference,
        body: TypeSymbol,
        scopes: impl IntoIterator<Item = ResourceScope>,
    ) {
        let scopes = scopes.into_iter().collect();
        self.schemas.insert(reference, Registration { body, scopes });
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_type(mut self, reference: ResourceTypeReference, body: TypeSymbol) -> Self {
        self.register(reference, body);
        self
    }

    /// Number of registered references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl ResourceTypeProvider for InMemoryTypeProvider {
    fn get_type(&self, scope: ResourceScope, reference: &ResourceTypeReference) -> Result<ResourceType> {
        let registration = self
            .schemas
            .get(reference)
            .ok_or_else(|| Error::unknown_resource_type(reference.to_string()))?;
        if !registration.scopes.contains(&scope) {
            return Err(Error::unsupported_scope(reference.to_string(), scope.name()));
        }
        Ok(ResourceType::new(reference.clone(), registration.body.clone()))
    }
}

// =============================================================================
// Caching Provider
// =============================================================================

/// Memoizes successful lookups of an inner provider per scope and reference.
///
/// Failures are not cached; the inner provider sees the request again.
#[derive(Debug)]
pub struct CachingTypeProvider<P> {
    inner: P,
    cache: RwLock<HashMap<(ResourceScope, ResourceTypeReference), ResourceType>>,
}

impl<P: ResourceTypeProvider> CachingTypeProvider<P> {
    /// Wraps `inner`.
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The wrapped provider.
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of cached entries.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.cache.write().clear();
    }
}

impl<P: ResourceTypeProvider> ResourceTypeProvider for CachingTypeProvider<P> {
    fn get_type(&self, scope: ResourceScope, reference: &ResourceTypeReference) -> Result<ResourceType> {
        let key = (scope, reference.clone());
        if let Some(hit) = self.cache.read().get(&key) {
            trace!(%reference, %scope, "schema cache hit");
            return Ok(hit.clone());
        }

        let resolved = self.inner.get_type(scope, reference)?;
        trace!(%reference, %scope, "schema cache miss");
        Ok(self.cache.write().entry(key).or_insert(resolved).clone())
    }
}
