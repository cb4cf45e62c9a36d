//! Integration tests for Layer 2: Types
//!
//! Tests for the type algebra, read-only conversion, and schema providers.

mod algebra;
mod providers;
mod read_only;
