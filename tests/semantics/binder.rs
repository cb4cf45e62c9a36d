//! Integration tests for the binder
//!
//! Tests whole-program binding, ordering, and failure isolation.

use quarry_foundation::DiagnosticCode;
use quarry_semantics::{Binder, BinderConfig};
use quarry_syntax::{Declaration, ProgramSyntax, SyntaxFactory};
use quarry_types::{
    CachingTypeProvider, InMemoryTypeProvider, ResourceScope, TypeSymbolValidationFlags,
};

use crate::{STORAGE, storage_body, storage_provider};

fn program(size: usize) -> ProgramSyntax {
    let mut f = SyntaxFactory::new();
    let mut declarations: Vec<Declaration> = Vec::new();
    for i in 0..size {
        let declaration: Declaration = match i % 4 {
            0 => {
                let leading = vec![f.decorator("secure", |_| Vec::new()), f.newline()];
                f.parameter(leading, &format!("secret{i}"), "string").into()
            }
            1 => f
                .resource(Vec::new(), &format!("sa{i}"), |f| f.string(STORAGE), true, |f| {
                    f.object(|_| Vec::new())
                })
                .into(),
            2 => f
                .resource(
                    Vec::new(),
                    &format!("bad{i}"),
                    |f| f.interpolated_string(&["Microsoft.Storage/", ""], &["suffix"]),
                    false,
                    |f| f.object(|_| Vec::new()),
                )
                .into(),
            _ => f.output(Vec::new(), &format!("out{i}"), "float", |f| f.integer(1)).into(),
        };
        declarations.push(declaration);
    }
    ProgramSyntax::new(declarations)
}

#[test]
fn parallel_binding_preserves_source_order() {
    let provider = CachingTypeProvider::new(storage_provider());
    let program = program(200);
    let bound = Binder::new(&provider)
        .with_config(BinderConfig::parallel())
        .bind(&program);

    assert_eq!(bound.declarations.len(), 200);
    for (bound, declaration) in bound.declarations.iter().zip(&program.declarations) {
        assert_eq!(bound.name, declaration.name().name());
    }
    assert_eq!(provider.cached_len(), 1);
}

#[test]
fn diagnostics_follow_declaration_order() {
    let provider = storage_provider();
    let bound = Binder::new(&provider)
        .with_config(BinderConfig::sequential())
        .bind(&program(8));

    let codes: Vec<&DiagnosticCode> = bound.diagnostics().into_iter().map(|d| &d.code).collect();
    assert_eq!(
        codes,
        vec![
            &DiagnosticCode::ResourceTypeInterpolationUnsupported,
            &DiagnosticCode::InvalidOutputType,
            &DiagnosticCode::ResourceTypeInterpolationUnsupported,
            &DiagnosticCode::InvalidOutputType,
        ]
    );
    assert_eq!(bound.error_count(), 4);
}

#[test]
fn healthy_declarations_are_unaffected() {
    let provider = storage_provider();
    let bound = Binder::new(&provider).bind(&program(4));

    let secret = bound.get("secret0").unwrap();
    assert!(!secret.has_errors());
    assert!(
        secret
            .narrowed_type
            .validation_flags()
            .contains(TypeSymbolValidationFlags::IS_SECURE)
    );
    assert!(bound.get("sa1").unwrap().declared_type.as_resource().is_some());
}

#[test]
fn scope_without_schema_fails_per_declaration() {
    let mut provider = InMemoryTypeProvider::new();
    provider.register_at(STORAGE.parse().unwrap(), storage_body(), [ResourceScope::ResourceGroup]);
    let config = BinderConfig::default().with_target_scope(ResourceScope::ManagementGroup);
    let bound = Binder::new(&provider).with_config(config).bind(&program(4));

    let resource = bound.get("sa1").unwrap();
    assert!(matches!(
        resource.declared_type.diagnostic().unwrap().code,
        DiagnosticCode::UnknownResourceType(_)
    ));
    assert!(!bound.get("secret0").unwrap().has_errors());
}
