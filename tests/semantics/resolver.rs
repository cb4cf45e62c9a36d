//! Integration tests for resource type resolution
//!
//! Tests the resolution steps and their diagnostics.

use quarry_foundation::{DiagnosticCode, Spanned};
use quarry_semantics::resolve_resource_type;
use quarry_syntax::{ResourceDeclarationSyntax, SyntaxBase, SyntaxFactory};
use quarry_types::{ResourceScope, TypePropertyFlags, TypeSymbol, make_read_only};

use crate::{STORAGE, storage_body, storage_provider};

fn declare(
    type_reference: impl FnOnce(&mut SyntaxFactory) -> SyntaxBase,
    existing: bool,
) -> ResourceDeclarationSyntax {
    let mut f = SyntaxFactory::new();
    f.resource(Vec::new(), "sa", type_reference, existing, |f| f.object(|_| Vec::new()))
}

fn resolve(declaration: &ResourceDeclarationSyntax) -> TypeSymbol {
    resolve_resource_type(declaration, ResourceScope::ResourceGroup, &storage_provider())
}

#[test]
fn new_resource_gets_schema_unchanged() {
    let ty = resolve(&declare(|f| f.string(STORAGE), false));
    assert_eq!(ty.as_resource().unwrap().body.as_ref(), &storage_body());
}

#[test]
fn existing_resource_gets_read_only_schema() {
    let ty = resolve(&declare(|f| f.string(STORAGE), true));
    let body = ty.as_resource().unwrap().body.clone();
    assert_eq!(body.as_ref(), &make_read_only(&storage_body()));

    let object = body.as_object().unwrap();
    assert_eq!(object.property("name").unwrap().flags, TypePropertyFlags::REQUIRED);
    for name in ["location", "sku", "kind", "id"] {
        assert_eq!(object.property(name).unwrap().flags, TypePropertyFlags::READ_ONLY, "{name}");
    }
}

#[test]
fn reference_case_does_not_matter() {
    let ty = resolve(&declare(|f| f.string("MICROSOFT.STORAGE/storageaccounts@2021-04-01"), false));
    assert!(ty.as_resource().is_some());
}

#[test]
fn non_ascii_version_is_invalid_type() {
    let text = "Microsoft.Storage/storageAccounts@\u{0662}\u{0660}\u{0662}\u{0661}-04-01";
    let declaration = declare(|f| f.string(text), false);
    let diagnostic = resolve(&declaration).diagnostic().unwrap().clone();
    assert_eq!(diagnostic.code, DiagnosticCode::InvalidResourceType);
    assert_eq!(diagnostic.span, declaration.type_reference().span());
}

#[test]
fn interpolation_always_wins() {
    for (segments, variables) in [
        (vec!["", ""], vec!["fullType"]),
        (vec!["Microsoft.Storage/storageAccounts@2021-04-01", ""], vec!["nothing"]),
        (vec!["not/a", "type", ""], vec!["x", "y"]),
    ] {
        let declaration = declare(|f| f.interpolated_string(&segments, &variables), true);
        let ty = resolve(&declaration);
        let diagnostic = ty.diagnostic().unwrap();
        assert_eq!(diagnostic.code, DiagnosticCode::ResourceTypeInterpolationUnsupported);
        assert_eq!(diagnostic.span, declaration.type_reference().span());
    }
}

#[test]
fn errors_are_positioned_on_the_type() {
    let declaration = declare(|f| f.string("nonsense"), false);
    let ty = resolve(&declaration);
    let diagnostic = ty.diagnostic().unwrap();
    assert_eq!(diagnostic.code, DiagnosticCode::InvalidResourceType);
    assert_eq!(diagnostic.span, declaration.type_reference().span());
}

#[test]
fn unknown_version_is_unknown_type() {
    let ty = resolve(&declare(|f| f.string("Microsoft.Storage/storageAccounts@1999-01-01"), false));
    assert!(matches!(
        ty.diagnostic().unwrap().code,
        DiagnosticCode::UnknownResourceType(_)
    ));
}
