//! Declaration binding.
//!
//! The binder resolves each declaration's type and evaluates its decorators.
//! Declarations depend only on their own syntax, the registry and the schema
//! provider, so a program can be bound on the rayon pool. Results always come
//! back in source order.

use indexmap::IndexMap;
use quarry_foundation::{Diagnostic, Error, Spanned, TextSpan};
use quarry_syntax::{Declaration, DeclarationKind, ProgramSyntax, SyntaxBase};
use quarry_types::{ResourceTypeProvider, TypeSymbol};
use rayon::prelude::*;
use tracing::debug;

use crate::config::BinderConfig;
use crate::decorator::{DecoratorRegistry, evaluate_decorators};
use crate::resolver::resolve_declared_type;

// =============================================================================
// Bound Results
// =============================================================================

/// The semantic view of one declaration.
#[derive(Debug)]
pub struct BoundDeclaration {
    /// The declared name.
    pub name: String,
    /// Resource, output or parameter.
    pub kind: DeclarationKind,
    /// Where the declaration is.
    pub span: TextSpan,
    /// The type before decorators.
    pub declared_type: TypeSymbol,
    /// The type after decorators narrowed it.
    pub narrowed_type: TypeSymbol,
    /// Decorator metadata by key.
    pub metadata: IndexMap<String, SyntaxBase>,
    /// Decorator applications with no registered definition.
    pub unknown_decorators: Vec<Error>,
}

impl BoundDeclaration {
    /// Error diagnostics found while resolving the type.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        self.declared_type.diagnostics()
    }

    /// Returns true if the type failed to resolve or a decorator is unknown.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.declared_type.is_error() || !self.unknown_decorators.is_empty()
    }
}

/// Every declaration of a program, bound, in source order.
#[derive(Debug, Default)]
pub struct BoundProgram {
    /// Bound declarations in source order.
    pub declarations: Vec<BoundDeclaration>,
}

impl BoundProgram {
    /// Looks up a declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BoundDeclaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    /// All diagnostics, in declaration source order.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        self.declarations.iter().flat_map(BoundDeclaration::diagnostics).collect()
    }

    /// Unknown decorator applications, in declaration source order.
    #[must_use]
    pub fn unknown_decorators(&self) -> Vec<&Error> {
        self.declarations.iter().flat_map(|d| &d.unknown_decorators).collect()
    }

    /// Number of declarations with errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.declarations.iter().filter(|d| d.has_errors()).count()
    }
}

// =============================================================================
// Binder
// =============================================================================

/// Binds declarations against a schema provider and decorator registry.
pub struct Binder<'a> {
    provider: &'a dyn ResourceTypeProvider,
    registry: &'a DecoratorRegistry,
    config: BinderConfig,
}

impl<'a> Binder<'a> {
    /// Creates a binder using the global decorator registry and default
    /// configuration.
    #[must_use]
    pub fn new(provider: &'a dyn ResourceTypeProvider) -> Self {
        Self {
            provider,
            registry: DecoratorRegistry::global(),
            config: BinderConfig::default(),
        }
    }

    /// Uses `registry` instead of the global one.
    #[must_use]
    pub fn with_registry(mut self, registry: &'a DecoratorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Uses `config`.
    #[must_use]
    pub fn with_config(mut self, config: BinderConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Binds one declaration.
    #[must_use]
    pub fn bind_declaration(&self, declaration: &Declaration) -> BoundDeclaration {
        let declared_type = resolve_declared_type(declaration, self.config.target_scope, self.provider);
        let evaluation = evaluate_decorators(declaration, declared_type.clone(), self.registry);

        let name = declaration.name().name().to_string();
        debug!(
            declaration = %name,
            kind = ?declaration.kind(),
            ty = %declared_type,
            metadata = evaluation.metadata.len(),
            "bound declaration"
        );

        BoundDeclaration {
            name,
            kind: declaration.kind(),
            span: declaration.span(),
            declared_type,
            narrowed_type: evaluation.narrowed_type,
            metadata: evaluation.metadata,
            unknown_decorators: evaluation.unknown_decorators,
        }
    }

    /// Binds every declaration of `program`.
    #[must_use]
    pub fn bind(&self, program: &ProgramSyntax) -> BoundProgram {
        let count = program.declarations.len();
        let parallel = self.config.runs_parallel(count);
        debug!(declarations = count, parallel, scope = %self.config.target_scope, "binding program");

        let declarations = if parallel {
            program
                .declarations
                .par_iter()
                .map(|declaration| self.bind_declaration(declaration))
                .collect()
        } else {
            program
                .declarations
                .iter()
                .map(|declaration| self.bind_declaration(declaration))
                .collect()
        };

        BoundProgram { declarations }
    }
}
