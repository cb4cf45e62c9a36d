//! Source spans, diagnostics, errors, and flag sets for Quarry.
//!
//! This crate provides:
//! - [`TextSpan`] - Source locations for syntax nodes
//! - [`Diagnostic`] - User-facing semantic errors with a code and span
//! - [`Error`] - Library errors with context
//! - [`flag_set!`] - Composable bitset newtypes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagnostic;
pub mod error;
pub mod flags;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, DiagnosticLevel};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use span::{Spanned, TextSpan};
