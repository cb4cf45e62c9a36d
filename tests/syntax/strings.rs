//! Integration tests for string nodes
//!
//! Tests literal extraction and interpolation detection.

use quarry_syntax::{StringSyntax, SyntaxBase, SyntaxFactory, SyntaxKind};

fn as_string(node: &SyntaxBase) -> &StringSyntax {
    node.as_string().expect("string node")
}

#[test]
fn plain_string_has_literal_value() {
    let mut f = SyntaxFactory::new();
    let node = f.string("Microsoft.Web/sites@2020-06-01");
    let string = as_string(&node);
    assert!(!string.is_interpolated());
    assert_eq!(string.try_get_literal_value(), Some("Microsoft.Web/sites@2020-06-01"));
}

#[test]
fn interpolated_string_has_no_literal_value() {
    let mut f = SyntaxFactory::new();
    let node = f.interpolated_string(&["Microsoft.Web/", "@2020-06-01"], &["kind"]);
    let string = as_string(&node);
    assert!(string.is_interpolated());
    assert_eq!(string.try_get_literal_value(), None);
    assert_eq!(string.expressions().len(), 1);
    assert_eq!(string.expressions()[0].kind(), SyntaxKind::VariableAccess);
    assert_eq!(string.string_tokens().len(), 2);
}

#[test]
fn multi_hole_interpolation_keeps_segments() {
    let mut f = SyntaxFactory::new();
    let node = f.interpolated_string(&["a", "b", "c"], &["x", "y"]);
    let string = as_string(&node);
    assert_eq!(string.segment_values(), ["a", "b", "c"]);
    assert_eq!(string.string_tokens().len(), 3);
}

#[test]
#[should_panic(expected = "one more token than expressions")]
fn mismatched_segments_panic() {
    let mut f = SyntaxFactory::new();
    let token = f.token(quarry_syntax::TokenKind::StringComplete, "'a'");
    let variable = f.variable("x");
    let _ = StringSyntax::new(vec![token], vec![variable], vec!["a".to_string()]);
}
