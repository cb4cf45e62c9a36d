//! Evaluation of a declaration's decorators.

use indexmap::IndexMap;
use quarry_foundation::{Error, ErrorContext, Spanned};
use quarry_syntax::{Declaration, SyntaxBase};
use quarry_types::TypeSymbol;
use tracing::trace;

use super::registry::DecoratorRegistry;

/// The combined result of every decorator on one declaration.
#[derive(Debug)]
pub struct DecoratorEvaluation {
    /// Metadata by key. A repeated key keeps its first position and its last
    /// value.
    pub metadata: IndexMap<String, SyntaxBase>,
    /// The declaration type after every decorator narrowed it.
    pub narrowed_type: TypeSymbol,
    /// Applications whose name is not registered, in source order.
    pub unknown_decorators: Vec<Error>,
}

/// Evaluates the decorators of `declaration` in source order.
///
/// Each decorator sees the type as narrowed by the ones before it. Unknown
/// names are skipped and reported; evaluation itself never fails.
#[must_use]
pub fn evaluate_decorators(
    declaration: &Declaration,
    resolved_type: TypeSymbol,
    registry: &DecoratorRegistry,
) -> DecoratorEvaluation {
    let mut metadata = IndexMap::new();
    let mut narrowed_type = resolved_type;
    let mut unknown_decorators = Vec::new();

    for syntax in declaration.decorators() {
        let decorator = match registry.lookup(syntax.name()) {
            Ok(decorator) => decorator,
            Err(err) => {
                trace!(decorator = %syntax, "skipping unknown decorator");
                unknown_decorators.push(err.with_context(
                    ErrorContext::new()
                        .with_source(declaration.name().name())
                        .with_span(syntax.span()),
                ));
                continue;
            }
        };

        if let Some(entry) = decorator.evaluate(syntax, &narrowed_type) {
            metadata.insert(entry.key, entry.value);
        }
        narrowed_type = decorator.narrow(&narrowed_type);
    }

    DecoratorEvaluation {
        metadata,
        narrowed_type,
        unknown_decorators,
    }
}
