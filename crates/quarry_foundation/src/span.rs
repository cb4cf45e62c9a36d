//! Source location tracking.
//!
//! `TextSpan` tracks the position of tokens and syntax nodes in source text
//! for diagnostics.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A span of source text.
///
/// Stored as a byte offset plus a length, so spans of sibling nodes can be
/// combined without re-reading the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextSpan {
    /// Byte offset where this span starts.
    pub position: usize,
    /// Length of this span in bytes.
    pub length: usize,
}

impl TextSpan {
    /// The empty span at the start of input.
    pub const NIL: Self = Self {
        position: 0,
        length: 0,
    };

    /// Creates a new span.
    #[must_use]
    pub const fn new(position: usize, length: usize) -> Self {
        Self { position, length }
    }

    /// Byte offset one past the last byte covered by this span.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.position + self.length
    }

    /// Creates a span covering the range from the start of `first` to the end
    /// of `last`.
    ///
    /// # Panics
    ///
    /// Panics if `last` ends before `first` starts. Node spans are always
    /// derived from children in source order, so this indicates a malformed
    /// tree.
    #[must_use]
    pub fn between(first: Self, last: Self) -> Self {
        assert!(
            last.end() >= first.position,
            "span {last} ends before span {first} starts"
        );
        Self {
            position: first.position,
            length: last.end() - first.position,
        }
    }

    /// Returns true if this span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns true if `other` lies entirely within this span.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        other.position >= self.position && other.end() <= self.end()
    }

    /// Returns the text this span covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.position..self.end()]
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.position, self.end())
    }
}

/// Anything that occupies a region of source text.
pub trait Spanned {
    /// Returns the source span of this item.
    fn span(&self) -> TextSpan;
}

impl Spanned for TextSpan {
    fn span(&self) -> TextSpan {
        *self
    }
}

impl<T: Spanned + ?Sized> Spanned for &T {
    fn span(&self) -> TextSpan {
        (**self).span()
    }
}

impl<T: Spanned + ?Sized> Spanned for Box<T> {
    fn span(&self) -> TextSpan {
        (**self).span()
    }
}
