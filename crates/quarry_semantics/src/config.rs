//! Configuration for declaration binding.

use quarry_types::ResourceScope;

/// Configuration for the binder.
///
/// Controls the deployment scope and whether declarations are resolved on
/// the rayon thread pool.
#[derive(Clone, Debug)]
pub struct BinderConfig {
    /// Scope resource schemas are looked up at.
    pub target_scope: ResourceScope,

    /// Whether declarations may be resolved in parallel.
    pub parallel: bool,

    /// Programs with fewer declarations are always resolved sequentially.
    pub parallel_threshold: usize,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            target_scope: ResourceScope::ResourceGroup,
            parallel: true,
            parallel_threshold: 32,
        }
    }
}

impl BinderConfig {
    /// Creates a configuration that never leaves the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that parallelizes every program.
    #[must_use]
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 0,
            ..Self::default()
        }
    }

    /// Builder method to set the target scope.
    #[must_use]
    pub fn with_target_scope(mut self, scope: ResourceScope) -> Self {
        self.target_scope = scope;
        self
    }

    /// Builder method to enable/disable parallel resolution.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder method to set the parallel threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if a program of `declarations` should be resolved in
    /// parallel.
    #[must_use]
    pub fn runs_parallel(&self, declarations: usize) -> bool {
        self.parallel && declarations >= self.parallel_threshold.max(2)
    }
}
