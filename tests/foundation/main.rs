//! Integration tests for Layer 0: Foundation
//!
//! Tests for spans, diagnostics, library errors, and flag sets.

mod diagnostics;
mod errors;
mod flags;
