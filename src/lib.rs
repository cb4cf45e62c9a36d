//! Quarry - Semantic type layer for a declarative infrastructure language
//!
//! This crate re-exports all layers of the Quarry system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: quarry_semantics  — Resolver, decorators, binder
//! Layer 2: quarry_types      — Type algebra, type references, schema providers
//! Layer 1: quarry_syntax     — Tokens and declaration syntax nodes
//! Layer 0: quarry_foundation — Spans, diagnostics, errors, flag sets
//! ```

pub use quarry_foundation as foundation;
pub use quarry_semantics as semantics;
pub use quarry_syntax as syntax;
pub use quarry_types as types;
