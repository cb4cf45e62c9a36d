//! Diagnostics produced by semantic analysis.
//!
//! This layer only selects a diagnostic kind and the span it applies to.
//! Formatting for humans happens downstream; the messages here are the short
//! default text for each code.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::span::{Spanned, TextSpan};

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticLevel {
    /// Informational.
    Info,
    /// The program compiles but is suspicious.
    Warning,
    /// The program is invalid.
    Error,
}

/// The kind of a diagnostic, with any data its message needs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticCode {
    /// The resource type is not a valid `<types>@<apiVersion>` string.
    InvalidResourceType,
    /// The resource type string contains interpolation.
    ResourceTypeInterpolationUnsupported,
    /// The schema provider does not know the resource type.
    UnknownResourceType(String),
    /// The output type annotation is not one of the supported types.
    InvalidOutputType,
    /// The parameter type annotation is not one of the supported types.
    InvalidParameterType,
    /// A structured type could not be rebuilt.
    MalformedType(String),
}

impl DiagnosticCode {
    /// Returns the stable code string, e.g. `BCP029`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidResourceType => "BCP029",
            Self::InvalidOutputType => "BCP030",
            Self::InvalidParameterType => "BCP031",
            Self::ResourceTypeInterpolationUnsupported => "BCP047",
            Self::MalformedType(_) => "BCP070",
            Self::UnknownResourceType(_) => "BCP081",
        }
    }

    /// Returns the default severity for this code.
    #[must_use]
    pub const fn level(&self) -> DiagnosticLevel {
        match self {
            Self::InvalidResourceType
            | Self::ResourceTypeInterpolationUnsupported
            | Self::UnknownResourceType(_)
            | Self::InvalidOutputType
            | Self::InvalidParameterType
            | Self::MalformedType(_) => DiagnosticLevel::Error,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResourceType => write!(
                f,
                "The resource type is not valid. Specify a valid resource type of format \"<types>@<apiVersion>\"."
            ),
            Self::ResourceTypeInterpolationUnsupported => write!(
                f,
                "String interpolation is unsupported for specifying the resource type."
            ),
            Self::UnknownResourceType(reference) => {
                write!(f, "Resource type \"{reference}\" is not available.")
            }
            Self::InvalidOutputType => write!(
                f,
                "The output type is not valid. Specify one of: array, bool, int, object, string."
            ),
            Self::InvalidParameterType => write!(
                f,
                "The parameter type is not valid. Specify one of: array, bool, int, object, string."
            ),
            Self::MalformedType(reason) => write!(f, "The type is malformed: {reason}"),
        }
    }
}

/// A diagnostic attached to a region of source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// Where the diagnostic applies.
    pub span: TextSpan,
    /// Severity.
    pub level: DiagnosticLevel,
    /// What went wrong.
    pub code: DiagnosticCode,
}

impl Diagnostic {
    /// Creates a diagnostic with the default level for its code.
    #[must_use]
    pub fn new(span: TextSpan, code: DiagnosticCode) -> Self {
        Self {
            span,
            level: code.level(),
            code,
        }
    }

    /// Returns true if this diagnostic is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.span, self.code.code(), self.code)
    }
}

/// Builds diagnostics positioned on a syntax node.
///
/// ```
/// use quarry_foundation::{DiagnosticBuilder, DiagnosticCode, TextSpan};
///
/// let diagnostic = DiagnosticBuilder::for_position(TextSpan::new(9, 12)).invalid_resource_type();
/// assert_eq!(diagnostic.code, DiagnosticCode::InvalidResourceType);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticBuilder {
    span: TextSpan,
}

impl DiagnosticBuilder {
    /// Starts a diagnostic at the span of `positionable`.
    #[must_use]
    pub fn for_position(positionable: impl Spanned) -> Self {
        Self {
            span: positionable.span(),
        }
    }

    fn build(self, code: DiagnosticCode) -> Diagnostic {
        Diagnostic::new(self.span, code)
    }

    /// `BCP029`
    #[must_use]
    pub fn invalid_resource_type(self) -> Diagnostic {
        self.build(DiagnosticCode::InvalidResourceType)
    }

    /// `BCP047`
    #[must_use]
    pub fn resource_type_interpolation_unsupported(self) -> Diagnostic {
        self.build(DiagnosticCode::ResourceTypeInterpolationUnsupported)
    }

    /// `BCP081`
    #[must_use]
    pub fn unknown_resource_type(self, reference: impl fmt::Display) -> Diagnostic {
        self.build(DiagnosticCode::UnknownResourceType(reference.to_string()))
    }

    /// `BCP030`
    #[must_use]
    pub fn invalid_output_type(self) -> Diagnostic {
        self.build(DiagnosticCode::InvalidOutputType)
    }

    /// `BCP031`
    #[must_use]
    pub fn invalid_parameter_type(self) -> Diagnostic {
        self.build(DiagnosticCode::InvalidParameterType)
    }

    /// `BCP070`
    #[must_use]
    pub fn malformed_type(self, reason: impl Into<String>) -> Diagnostic {
        self.build(DiagnosticCode::MalformedType(reason.into()))
    }
}
