//! Token types for declaration syntax.
//!
//! Tokens are produced by the external lexer and held by syntax nodes.
//! Keywords are identifier tokens; their text decides which keyword they are.

use quarry_foundation::{Spanned, TextSpan};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The type of this token.
    pub kind: TokenKind,
    /// The source text of this token.
    pub text: String,
    /// Source location of this token.
    pub span: TextSpan,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: TextSpan) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns true if this is an identifier token spelling `keyword`.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == keyword
    }
}

impl Spanned for Token {
    fn span(&self) -> TextSpan {
        self.span
    }
}

/// Token types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    // Delimiters
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftSquare,
    /// `]`
    RightSquare,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,

    // Punctuation
    /// `@`
    At,
    /// `=`
    Assignment,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Dot,

    // Literals
    /// Identifier, including keywords like `resource` or `existing`
    Identifier,
    /// Integer literal like `42`
    Integer,
    /// Whole string without interpolation, like `'abc'`
    StringComplete,
    /// Leading piece of an interpolated string, like `'abc${`
    StringLeftPiece,
    /// Inner piece of an interpolated string, like `}abc${`
    StringMiddlePiece,
    /// Trailing piece of an interpolated string, like `}abc'`
    StringRightPiece,
    /// `true`
    TrueKeyword,
    /// `false`
    FalseKeyword,
    /// `null`
    NullKeyword,

    // Meta
    /// Line break
    NewLine,
    /// End of input
    EndOfFile,
    /// Unrecognized input
    Unrecognized,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
            Self::LeftSquare => "'['",
            Self::RightSquare => "']'",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::At => "'@'",
            Self::Assignment => "'='",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::StringComplete
            | Self::StringLeftPiece
            | Self::StringMiddlePiece
            | Self::StringRightPiece => "string",
            Self::TrueKeyword => "true",
            Self::FalseKeyword => "false",
            Self::NullKeyword => "null",
            Self::NewLine => "newline",
            Self::EndOfFile => "end of input",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Returns true for any of the string segment kinds.
    #[must_use]
    pub const fn is_string_segment(self) -> bool {
        matches!(
            self,
            Self::StringComplete
                | Self::StringLeftPiece
                | Self::StringMiddlePiece
                | Self::StringRightPiece
        )
    }
}
