//! Integration tests for Layer 1: Syntax
//!
//! Tests for declaration construction, shape assertions, and string nodes.

mod declarations;
mod strings;
