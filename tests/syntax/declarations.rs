//! Integration tests for declarations
//!
//! Tests the declaration sum type and its shape assertions.

use quarry_foundation::{Spanned, TextSpan};
use quarry_syntax::{
    Declaration, DeclarationKind, IdentifierSyntax, OutputDeclarationSyntax, ProgramSyntax,
    ResourceDeclarationSyntax, SyntaxFactory, Token, TokenKind,
};

fn storage(f: &mut SyntaxFactory) -> ResourceDeclarationSyntax {
    let leading = vec![
        f.decorator("description", |f| vec![f.string("primary storage")]),
        f.newline(),
    ];
    f.resource(
        leading,
        "sa",
        |f| f.string("Microsoft.Storage/storageAccounts@2021-04-01"),
        true,
        |f| f.object(|f| vec![f.property("name", |f| f.string("prod"))]),
    )
}

#[test]
fn declaration_kinds_and_names() {
    let mut f = SyntaxFactory::new();
    let declarations: Vec<Declaration> = vec![
        storage(&mut f).into(),
        f.parameter(Vec::new(), "location", "string").into(),
        f.output(Vec::new(), "id", "string", |f| f.string("x")).into(),
    ];

    let kinds: Vec<DeclarationKind> = declarations.iter().map(Declaration::kind).collect();
    assert_eq!(
        kinds,
        vec![DeclarationKind::Resource, DeclarationKind::Parameter, DeclarationKind::Output]
    );
    let names: Vec<&str> = declarations.iter().map(|d| d.name().name()).collect();
    assert_eq!(names, vec!["sa", "location", "id"]);
}

#[test]
fn decorators_skip_newlines() {
    let mut f = SyntaxFactory::new();
    let declaration: Declaration = storage(&mut f).into();
    let decorators = declaration.decorators();
    assert_eq!(decorators.len(), 1);
    assert_eq!(decorators[0].name(), "description");
    assert_eq!(decorators[0].to_string(), "@description(1 args)");
}

#[test]
fn declaration_spans_are_ordered() {
    let mut f = SyntaxFactory::new();
    let first: Declaration = storage(&mut f).into();
    let second: Declaration = f.parameter(Vec::new(), "location", "string").into();
    assert!(first.span().end() <= second.span().position);
    assert!(first.span().contains(first.name().span()));
}

#[test]
fn program_keeps_order() {
    let mut f = SyntaxFactory::new();
    let program = ProgramSyntax::new(vec![
        f.parameter(Vec::new(), "a", "int").into(),
        f.parameter(Vec::new(), "b", "int").into(),
    ]);
    assert_eq!(program.declarations[1].name().name(), "b");
}

#[test]
#[should_panic(expected = "keyword")]
fn output_with_parameter_keyword_panics() {
    let mut f = SyntaxFactory::new();
    let keyword = f.keyword("param");
    let name = f.identifier("id");
    let output_type = f.type_syntax("string");
    let assignment = f.assignment();
    let value = f.string("x");
    let _ = OutputDeclarationSyntax::new(Vec::new(), keyword, name, output_type, assignment, value);
}

#[test]
#[should_panic(expected = "existing")]
fn resource_with_wrong_existing_marker_panics() {
    let mut f = SyntaxFactory::new();
    let keyword = f.keyword("resource");
    let name = f.identifier("sa");
    let type_reference = f.string("Microsoft.Storage/storageAccounts@2021-04-01");
    let marker = Token::new(TokenKind::Identifier, "extant", TextSpan::new(500, 6));
    let assignment = f.assignment();
    let body = f.object(|_| Vec::new());
    let _ = ResourceDeclarationSyntax::new(
        Vec::new(),
        keyword,
        name,
        type_reference,
        Some(marker),
        assignment,
        None,
        body,
    );
}

#[test]
#[should_panic(expected = "body")]
fn resource_with_string_body_panics() {
    let mut f = SyntaxFactory::new();
    let keyword = f.keyword("resource");
    let name: IdentifierSyntax = f.identifier("sa");
    let type_reference = f.string("Microsoft.Storage/storageAccounts@2021-04-01");
    let assignment = f.assignment();
    let body = f.string("not an object");
    let _ = ResourceDeclarationSyntax::new(
        Vec::new(),
        keyword,
        name,
        type_reference,
        None,
        assignment,
        None,
        body,
    );
}
