//! Declared-type resolution.
//!
//! Every failure here is a value: an error type carrying a diagnostic
//! positioned on the offending type node. Nothing in this module returns
//! `Err` or panics on user input.

use quarry_foundation::{DiagnosticBuilder, Spanned};
use quarry_syntax::{
    Declaration, OutputDeclarationSyntax, ParameterDeclarationSyntax, ResourceDeclarationSyntax,
    SyntaxBase,
};
use quarry_types::{
    ResourceScope, ResourceTypeProvider, ResourceTypeReference, TypeSymbol, make_read_only,
};
use tracing::trace;

/// Resolves the type of a resource declaration.
///
/// The type reference must be a plain string literal naming a schema the
/// provider knows at `scope`. For `existing` declarations the body is
/// converted with [`make_read_only`].
#[must_use]
pub fn resolve_resource_type(
    declaration: &ResourceDeclarationSyntax,
    scope: ResourceScope,
    provider: &dyn ResourceTypeProvider,
) -> TypeSymbol {
    let type_node = declaration.type_reference();
    let at_type = DiagnosticBuilder::for_position(type_node);

    let Some(string) = declaration.type_string() else {
        return TypeSymbol::error(at_type.invalid_resource_type());
    };
    if string.is_interpolated() {
        return TypeSymbol::error(at_type.resource_type_interpolation_unsupported());
    }
    let Some(text) = string.try_get_literal_value() else {
        return TypeSymbol::error(at_type.invalid_resource_type());
    };
    let reference = match ResourceTypeReference::parse(text) {
        Ok(reference) => reference,
        Err(err) => {
            trace!(error = %err, "resource type reference rejected");
            return TypeSymbol::error(at_type.invalid_resource_type());
        }
    };

    let resource = match provider.get_type(scope, &reference) {
        Ok(resource) => resource,
        Err(err) => {
            trace!(%reference, %scope, error = %err, "schema lookup failed");
            return TypeSymbol::error(at_type.unknown_resource_type(&reference));
        }
    };

    if !declaration.is_existing_resource() {
        return TypeSymbol::Resource(resource);
    }

    let body = make_read_only(&resource.body);
    if body.is_error() {
        return body.anchored_at(type_node.span());
    }
    TypeSymbol::Resource(resource.with_body(body))
}

/// Maps a type keyword (`string`, `int`, `bool`, `object`, `array`) to its
/// type.
#[must_use]
pub fn type_from_keyword(keyword: &str) -> Option<TypeSymbol> {
    match keyword {
        "string" => Some(TypeSymbol::string()),
        "int" => Some(TypeSymbol::int()),
        "bool" => Some(TypeSymbol::bool()),
        "object" => Some(TypeSymbol::any_object()),
        "array" => Some(TypeSymbol::any_array()),
        _ => None,
    }
}

fn keyword_of(node: &SyntaxBase) -> Option<&str> {
    node.as_type().map(quarry_syntax::TypeSyntax::type_name)
}

/// Resolves the annotated type of a parameter.
#[must_use]
pub fn resolve_parameter_type(declaration: &ParameterDeclarationSyntax) -> TypeSymbol {
    let node = declaration.parameter_type_node();
    keyword_of(node).and_then(type_from_keyword).unwrap_or_else(|| {
        TypeSymbol::error(DiagnosticBuilder::for_position(node).invalid_parameter_type())
    })
}

/// Resolves the annotated type of an output.
#[must_use]
pub fn resolve_output_type(declaration: &OutputDeclarationSyntax) -> TypeSymbol {
    let node = declaration.output_type_node();
    keyword_of(node).and_then(type_from_keyword).unwrap_or_else(|| {
        TypeSymbol::error(DiagnosticBuilder::for_position(node).invalid_output_type())
    })
}

/// Resolves the declared type of any declaration.
#[must_use]
pub fn resolve_declared_type(
    declaration: &Declaration,
    scope: ResourceScope,
    provider: &dyn ResourceTypeProvider,
) -> TypeSymbol {
    match declaration {
        Declaration::Resource(resource) => resolve_resource_type(resource, scope, provider),
        Declaration::Output(output) => resolve_output_type(output),
        Declaration::Parameter(parameter) => resolve_parameter_type(parameter),
    }
}
