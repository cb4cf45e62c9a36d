//! Integration tests for decorators
//!
//! Tests the built-in registry, evaluation rules, and custom decorators.

use quarry_semantics::{
    Decorator, DecoratorAttributes, DecoratorMetadata, DecoratorRegistry, FunctionFlags,
    FunctionOverload, evaluate_decorators,
};
use quarry_syntax::{
    Declaration, DeclarationKind, DecoratorSyntax, SyntaxBase, SyntaxFactory, SyntaxKind,
};
use quarry_types::{TypeSymbol, TypeSymbolValidationFlags};

fn parameter(
    type_name: &str,
    leading: impl FnOnce(&mut SyntaxFactory) -> Vec<SyntaxBase>,
) -> Declaration {
    let mut f = SyntaxFactory::new();
    let leading = leading(&mut f);
    f.parameter(leading, "value", type_name).into()
}

#[test]
fn max_length_metadata_is_unevaluated_argument() {
    let declaration = parameter("string", |f| vec![f.decorator("maxLength", |f| vec![f.integer(10)])]);
    let syntax = declaration.decorators()[0].clone();

    let result = evaluate_decorators(&declaration, TypeSymbol::string(), DecoratorRegistry::global());
    assert_eq!(result.metadata.len(), 1);
    assert_eq!(result.metadata["maxLength"], syntax.arguments()[0].expression);
}

#[test]
fn builtin_metadata_keys() {
    let declaration = parameter("int", |f| {
        vec![
            f.decorator("allowed", |f| vec![f.array(|f| vec![f.integer(1), f.integer(2)])]),
            f.decorator("minValue", |f| vec![f.integer(1)]),
            f.decorator("maxValue", |f| vec![f.integer(2)]),
            f.decorator("description", |f| vec![f.string("count")]),
            f.decorator("metadata", |f| vec![f.object(|_| Vec::new())]),
        ]
    });
    let result = evaluate_decorators(&declaration, TypeSymbol::int(), DecoratorRegistry::global());
    let keys: Vec<&str> = result.metadata.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["allowedValues", "minValue", "maxValue", "description", "metadata"]);
    assert_eq!(result.metadata["allowedValues"].kind(), SyntaxKind::Array);
}

#[test]
fn secure_object_parameter() {
    let declaration = parameter("object", |f| vec![f.decorator("secure", |_| Vec::new())]);
    let result = evaluate_decorators(&declaration, TypeSymbol::any_object(), DecoratorRegistry::global());
    assert!(result.metadata.is_empty());
    assert!(
        result
            .narrowed_type
            .validation_flags()
            .contains(TypeSymbolValidationFlags::IS_SECURE)
    );
}

#[test]
fn registry_exposes_applicability() {
    let registry = DecoratorRegistry::global();
    let secure = registry.get("secure").unwrap();
    assert!(secure.applies_to(DeclarationKind::Parameter));
    assert!(!secure.applies_to(DeclarationKind::Resource));
    assert!(secure.accepts_target(&TypeSymbol::string()));
    assert!(!secure.accepts_target(&TypeSymbol::int()));
    assert_eq!(secure.attributes().overload.parameters().len(), 0);

    let max_length = registry.get("maxLength").unwrap();
    assert_eq!(max_length.attributes().overload.to_string(), "maxLength(length: int): any");
}

// =============================================================================
// Custom Decorators
// =============================================================================

#[derive(Debug)]
struct Tags {
    attributes: DecoratorAttributes,
}

impl Tags {
    fn new() -> Self {
        Self {
            attributes: DecoratorAttributes::new(
                TypeSymbol::Any,
                FunctionOverload::builder("tags")
                    .with_required_parameter("first", TypeSymbol::string(), "First tag.")
                    .with_optional_parameter("second", TypeSymbol::string(), "Second tag.")
                    .with_flags(FunctionFlags::RESOURCE_DECORATOR)
                    .build(),
            ),
        }
    }
}

impl Decorator for Tags {
    fn attributes(&self) -> &DecoratorAttributes {
        &self.attributes
    }

    fn evaluate(&self, syntax: &DecoratorSyntax, _target: &TypeSymbol) -> Option<DecoratorMetadata> {
        let last = syntax.arguments().last()?;
        Some(DecoratorMetadata::new("lastTag", last.expression.clone()))
    }

    fn narrow(&self, _target: &TypeSymbol) -> TypeSymbol {
        TypeSymbol::string()
    }
}

#[test]
fn custom_decorator_overrides_rules() {
    let mut registry = DecoratorRegistry::with_builtins();
    registry.register(Box::new(Tags::new()));

    let declaration = parameter("int", |f| {
        vec![f.decorator("tags", |f| vec![f.string("a"), f.string("b")])]
    });
    let result = evaluate_decorators(&declaration, TypeSymbol::int(), &registry);

    let value = &result.metadata["lastTag"];
    assert_eq!(
        value.as_string().and_then(|s| s.try_get_literal_value()),
        Some("b")
    );
    assert_eq!(result.narrowed_type, TypeSymbol::string());
}

#[test]
fn custom_decorator_unknown_to_global_registry() {
    let declaration = parameter("int", |f| vec![f.decorator("tags", |f| vec![f.string("a")])]);
    let result = evaluate_decorators(&declaration, TypeSymbol::int(), DecoratorRegistry::global());
    assert!(result.metadata.is_empty());
    assert_eq!(result.unknown_decorators.len(), 1);
}
