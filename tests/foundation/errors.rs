//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use quarry_foundation::{Error, ErrorContext, ErrorKind, TextSpan};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_duplicate_member() {
    let err = Error::duplicate_member("Pet", "dog");
    assert!(matches!(err.kind, ErrorKind::DuplicateMember { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("Pet"));
    assert!(msg.contains("dog"));
}

#[test]
fn error_missing_discriminator() {
    let err = Error::missing_discriminator("catProperties", "kind");
    assert!(matches!(err.kind, ErrorKind::MissingDiscriminator { .. }));
    assert!(err.to_string().contains("kind"));
}

#[test]
fn error_invalid_type_reference_quotes_input() {
    let err = Error::invalid_type_reference("not a type");
    assert_eq!(err.to_string(), "invalid resource type reference: \"not a type\"");
}

#[test]
fn error_unknown_resource_type() {
    let err = Error::unknown_resource_type("Microsoft.Web/sites@2020-06-01");
    assert!(matches!(err.kind, ErrorKind::UnknownResourceType(_)));
    assert!(err.to_string().contains("Microsoft.Web/sites"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    let err = Error::unknown_decorator("frobnicate");
    assert!(err.context.is_none());
}

#[test]
fn error_context_display() {
    let context = ErrorContext::new().with_span(TextSpan::new(3, 4));
    assert_eq!(context.to_string(), "[3:7]");

    let context = ErrorContext::new().with_source("storage");
    assert_eq!(context.to_string(), "at storage");
}

#[test]
fn errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
