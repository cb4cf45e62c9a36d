//! Error types for the Quarry system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! These are library errors (bad construction input, failed lookups). Errors
//! in the user's program are reported as diagnostics instead.

use std::fmt;

use thiserror::Error;

use crate::span::TextSpan;

/// The main error type for Quarry operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a duplicate property error.
    #[must_use]
    pub fn duplicate_property(object: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateProperty {
            object: object.into(),
            property: property.into(),
        })
    }

    /// Creates a duplicate union member error.
    #[must_use]
    pub fn duplicate_member(union: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateMember {
            union: union.into(),
            key: key.into(),
        })
    }

    /// Creates a missing discriminator error.
    #[must_use]
    pub fn missing_discriminator(member: impl Into<String>, discriminator: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingDiscriminator {
            member: member.into(),
            discriminator: discriminator.into(),
        })
    }

    /// Creates an invalid type reference error.
    #[must_use]
    pub fn invalid_type_reference(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidTypeReference(text.into()))
    }

    /// Creates an unknown resource type error.
    #[must_use]
    pub fn unknown_resource_type(reference: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownResourceType(reference.into()))
    }

    /// Creates an unsupported scope error.
    #[must_use]
    pub fn unsupported_scope(reference: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedScope {
            reference: reference.into(),
            scope: scope.into(),
        })
    }

    /// Creates an unknown decorator error.
    #[must_use]
    pub fn unknown_decorator(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownDecorator(name.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Two properties of one object share a name.
    #[error("duplicate property {property} in object {object}")]
    DuplicateProperty {
        /// The object being built.
        object: String,
        /// The repeated property name.
        property: String,
    },

    /// Two members of one discriminated union share a key.
    #[error("duplicate member {key} in union {union}")]
    DuplicateMember {
        /// The union being built.
        union: String,
        /// The repeated discriminator value.
        key: String,
    },

    /// A union member does not declare the discriminator property.
    #[error("member {member} has no string literal discriminator property {discriminator}")]
    MissingDiscriminator {
        /// The offending member.
        member: String,
        /// The expected discriminator property name.
        discriminator: String,
    },

    /// A string could not be parsed as a resource type reference.
    #[error("invalid resource type reference: {0:?}")]
    InvalidTypeReference(String),

    /// The schema provider has no schema for this resource type.
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    /// The resource type exists but cannot be deployed at this scope.
    #[error("resource type {reference} is not available at {scope} scope")]
    UnsupportedScope {
        /// The requested resource type.
        reference: String,
        /// The target scope.
        scope: String,
    },

    /// No decorator is registered under this name.
    #[error("unknown decorator: {0}")]
    UnknownDecorator(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Declaration or file name.
    pub source: Option<String>,
    /// Span in source.
    pub span: Option<TextSpan>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the span.
    #[must_use]
    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if let Some(span) = self.span {
            write!(f, "{span}")?;
        }
        Ok(())
    }
}

/// Result type alias using Quarry's Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_duplicate_property() {
        let err = Error::duplicate_property("Storage", "sku");
        assert!(matches!(err.kind, ErrorKind::DuplicateProperty { .. }));
        let msg = format!("{err}");
        assert!(msg.contains("sku"));
        assert!(msg.contains("Storage"));
    }

    #[test]
    fn error_with_context() {
        let err = Error::invalid_type_reference("nope").with_context(
            ErrorContext::new()
                .with_source("main.infra")
                .with_span(TextSpan::new(10, 5)),
        );

        let ctx = err.context.unwrap();
        assert_eq!(ctx.source, Some("main.infra".to_string()));
        assert_eq!(ctx.span, Some(TextSpan::new(10, 5)));
        assert_eq!(ctx.to_string(), "at main.infra[10:15]");
    }

    #[test]
    fn error_unsupported_scope() {
        let err = Error::unsupported_scope("Foo.Bar/baz@2020-01-01", "tenant");
        assert!(matches!(err.kind, ErrorKind::UnsupportedScope { .. }));
        assert!(err.to_string().contains("tenant"));
    }

    #[test]
    fn error_unknown_decorator() {
        let err = Error::unknown_decorator("frobnicate");
        assert!(matches!(err.kind, ErrorKind::UnknownDecorator(_)));
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn every_kind_has_a_constructor() {
        let errors = [
            Error::duplicate_property("Storage", "sku"),
            Error::duplicate_member("Pet", "dog"),
            Error::missing_discriminator("dog", "kind"),
            Error::invalid_type_reference("nope"),
            Error::unknown_resource_type("Foo.Bar/baz@2020-01-01"),
            Error::unsupported_scope("Foo.Bar/baz@2020-01-01", "tenant"),
            Error::unknown_decorator("frobnicate"),
        ];
        for err in &errors {
            // Exhaustive so a kind without a constructor fails to compile here.
            let covered = match &err.kind {
                ErrorKind::DuplicateProperty { .. }
                | ErrorKind::DuplicateMember { .. }
                | ErrorKind::MissingDiscriminator { .. }
                | ErrorKind::InvalidTypeReference(_)
                | ErrorKind::UnknownResourceType(_)
                | ErrorKind::UnsupportedScope { .. }
                | ErrorKind::UnknownDecorator(_) => true,
            };
            assert!(covered);
            assert!(!err.to_string().is_empty());
        }
    }
}
