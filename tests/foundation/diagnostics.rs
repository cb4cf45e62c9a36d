//! Integration tests for diagnostics
//!
//! Tests diagnostic codes, positioning, and display.

use quarry_foundation::{DiagnosticBuilder, DiagnosticCode, DiagnosticLevel, Spanned, TextSpan};

struct Node {
    start: usize,
    end: usize,
}

impl Spanned for Node {
    fn span(&self) -> TextSpan {
        TextSpan::new(self.start, self.end - self.start)
    }
}

#[test]
fn builder_positions_on_any_spanned_node() {
    let node = Node { start: 9, end: 52 };
    let diagnostic = DiagnosticBuilder::for_position(&node).invalid_resource_type();
    assert_eq!(diagnostic.span, TextSpan::new(9, 43));
    assert_eq!(diagnostic.level, DiagnosticLevel::Error);
}

#[test]
fn every_builder_method_has_a_stable_code() {
    let at = DiagnosticBuilder::for_position(TextSpan::NIL);
    let codes: Vec<&str> = [
        at.invalid_resource_type(),
        at.invalid_output_type(),
        at.invalid_parameter_type(),
        at.resource_type_interpolation_unsupported(),
        at.malformed_type("bad"),
        at.unknown_resource_type("A.B/c@2020-01-01"),
    ]
    .iter()
    .map(|d| d.code.code())
    .collect();
    assert_eq!(codes, vec!["BCP029", "BCP030", "BCP031", "BCP047", "BCP070", "BCP081"]);
}

#[test]
fn display_includes_span_and_code() {
    let diagnostic =
        DiagnosticBuilder::for_position(TextSpan::new(4, 6)).resource_type_interpolation_unsupported();
    let text = diagnostic.to_string();
    assert!(text.starts_with("[4:10] BCP047"));
    assert!(text.contains("interpolation"));
}

#[test]
fn malformed_type_carries_reason() {
    let diagnostic = DiagnosticBuilder::for_position(TextSpan::NIL).malformed_type("duplicate member dog");
    assert_eq!(
        diagnostic.code,
        DiagnosticCode::MalformedType("duplicate member dog".to_string())
    );
    assert!(diagnostic.to_string().contains("duplicate member dog"));
}
