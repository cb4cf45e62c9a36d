//! Declarative decorators.
//!
//! A decorator is an `@name(args...)` application on a declaration. Evaluating
//! one yields optional metadata for the declaration and may narrow its type.
//! Arguments are handed through as syntax; folding them to values is left to
//! a later stage.
//!
//! Each decorator is one [`Decorator`] implementation, registered by name in a
//! [`DecoratorRegistry`].

pub mod builtins;
pub mod evaluate;
pub mod overload;
pub mod registry;

use std::fmt;

use quarry_syntax::{DeclarationKind, DecoratorSyntax, SyntaxBase};
use quarry_types::TypeSymbol;

pub use evaluate::{DecoratorEvaluation, evaluate_decorators};
pub use overload::{FunctionFlags, FunctionOverload, FunctionOverloadBuilder, FunctionParameter};
pub use registry::DecoratorRegistry;

/// One piece of declaration metadata produced by a decorator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoratorMetadata {
    /// Metadata key, e.g. `maxLength`.
    pub key: String,
    /// The unevaluated argument expression.
    pub value: SyntaxBase,
}

impl DecoratorMetadata {
    /// Creates a metadata entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: SyntaxBase) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// What a decorator may be applied to and how it is called.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoratorAttributes {
    /// Types the decorator may be applied to.
    pub target_type: TypeSymbol,
    /// The call signature, including applicability flags.
    pub overload: FunctionOverload,
}

impl DecoratorAttributes {
    /// Creates decorator attributes.
    #[must_use]
    pub const fn new(target_type: TypeSymbol, overload: FunctionOverload) -> Self {
        Self {
            target_type,
            overload,
        }
    }
}

/// A decorator definition.
///
/// Applicability is exposed through [`accepts_target`](Self::accepts_target)
/// and [`applies_to`](Self::applies_to) but never enforced by
/// [`evaluate`](Self::evaluate); checking it is the binder's decision.
pub trait Decorator: Send + Sync + fmt::Debug {
    /// The target constraint and signature.
    fn attributes(&self) -> &DecoratorAttributes;

    /// The decorator name.
    fn name(&self) -> &str {
        self.attributes().overload.name()
    }

    /// Types this decorator may be applied to.
    fn target_type(&self) -> &TypeSymbol {
        &self.attributes().target_type
    }

    /// Declaration kinds this decorator may be applied to.
    fn flags(&self) -> FunctionFlags {
        self.attributes().overload.flags()
    }

    /// Returns true if a declaration of type `target` may carry this decorator.
    fn accepts_target(&self, target: &TypeSymbol) -> bool {
        self.target_type().accepts(target)
    }

    /// Returns true if a declaration of `kind` may carry this decorator.
    fn applies_to(&self, kind: DeclarationKind) -> bool {
        self.flags().allows(kind)
    }

    /// Produces the metadata for one application.
    ///
    /// The default is the decorator name paired with the first argument
    /// expression, or nothing when there are no arguments.
    fn evaluate(&self, syntax: &DecoratorSyntax, _target: &TypeSymbol) -> Option<DecoratorMetadata> {
        syntax
            .arguments()
            .first()
            .map(|argument| DecoratorMetadata::new(self.name(), argument.expression.clone()))
    }

    /// Returns the declaration type after this decorator is applied.
    fn narrow(&self, target: &TypeSymbol) -> TypeSymbol {
        target.clone()
    }
}
