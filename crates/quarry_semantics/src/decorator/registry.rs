//! Registry for decorator definitions.
//!
//! Stores and retrieves decorators by name.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use quarry_foundation::{Error, Result};

use super::{Decorator, builtins};

static GLOBAL: Lazy<DecoratorRegistry> = Lazy::new(DecoratorRegistry::with_builtins);

// =============================================================================
// DecoratorRegistry
// =============================================================================

/// Registry for storing and looking up decorators.
///
/// Names iterate in registration order.
#[derive(Debug, Default)]
pub struct DecoratorRegistry {
    decorators: IndexMap<String, Box<dyn Decorator>>,
}

impl DecoratorRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in decorators registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for decorator in builtins::all() {
            registry.register(decorator);
        }
        registry
    }

    /// The process-wide registry of built-in decorators.
    ///
    /// Built on first use and never modified afterwards.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers a decorator under its name, replacing any previous one.
    pub fn register(&mut self, decorator: Box<dyn Decorator>) {
        self.decorators.insert(decorator.name().to_string(), decorator);
    }

    /// Looks up a decorator by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Decorator> {
        self.decorators.get(name).map(AsRef::as_ref)
    }

    /// Looks up a decorator by name.
    ///
    /// # Errors
    ///
    /// Returns an `UnknownDecorator` error if nothing is registered under
    /// `name`.
    pub fn lookup(&self, name: &str) -> Result<&dyn Decorator> {
        self.get(name).ok_or_else(|| Error::unknown_decorator(name))
    }

    /// Checks if a decorator is registered with the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.decorators.contains_key(name)
    }

    /// Returns all registered names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.decorators.keys().map(String::as_str).collect()
    }

    /// Iterates over registered decorators in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Decorator> {
        self.decorators.values().map(AsRef::as_ref)
    }

    /// Returns the number of registered decorators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    /// Returns true if no decorators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
