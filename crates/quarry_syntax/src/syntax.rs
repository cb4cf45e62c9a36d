//! Syntax nodes for expressions and declaration parts.
//!
//! Every node is immutable once built. Constructors check the shape of what
//! they are given and panic on a mismatch: the parser that produces these
//! nodes is trusted, so a wrong token kind here is a bug upstream, not a
//! user error.

use std::fmt;

use quarry_foundation::{Spanned, TextSpan};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::token::{Token, TokenKind};

// =============================================================================
// Shape Assertions
// =============================================================================

/// Panics unless `token` is an identifier spelling `keyword`.
///
/// `None` is accepted so optional keyword slots can be checked uniformly.
pub(crate) fn assert_keyword(token: Option<&Token>, parameter: &str, keyword: &str) {
    if let Some(token) = token {
        assert!(
            token.is_keyword(keyword),
            "{parameter} must be the keyword '{keyword}', got {} {:?}",
            token.kind.name(),
            token.text
        );
    }
}

/// Panics unless `token` has the given kind. `None` is accepted.
pub(crate) fn assert_token_kind(token: Option<&Token>, parameter: &str, expected: TokenKind) {
    if let Some(token) = token {
        assert!(
            token.kind == expected,
            "{parameter} must be a {} token, got {}",
            expected.name(),
            token.kind.name()
        );
    }
}

/// Panics unless `node` is one of the allowed kinds. `None` is accepted.
pub(crate) fn assert_syntax_kind(node: Option<&SyntaxBase>, parameter: &str, allowed: &[SyntaxKind]) {
    if let Some(node) = node {
        assert!(
            allowed.contains(&node.kind()),
            "{parameter} must be one of {allowed:?}, got {:?}",
            node.kind()
        );
    }
}

// =============================================================================
// SyntaxBase
// =============================================================================

/// The discriminant of a [`SyntaxBase`] node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// A bare token.
    Token,
    /// [`IdentifierSyntax`]
    Identifier,
    /// [`StringSyntax`]
    String,
    /// [`TypeSyntax`]
    Type,
    /// [`IntegerLiteralSyntax`]
    IntegerLiteral,
    /// [`BooleanLiteralSyntax`]
    BooleanLiteral,
    /// [`NullLiteralSyntax`]
    NullLiteral,
    /// [`ArraySyntax`]
    Array,
    /// [`ObjectSyntax`]
    Object,
    /// [`FunctionCallSyntax`]
    FunctionCall,
    /// [`VariableAccessSyntax`]
    VariableAccess,
    /// [`IfConditionSyntax`]
    IfCondition,
    /// [`ParameterDefaultValueSyntax`]
    ParameterDefaultValue,
    /// [`DecoratorSyntax`]
    Decorator,
    /// [`SkippedTriviaSyntax`]
    SkippedTrivia,
}

/// Any syntax node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SyntaxBase {
    /// A bare token, e.g. an assignment or a newline between leading nodes.
    Token(Token),
    /// `name`
    Identifier(IdentifierSyntax),
    /// `'text'` or `'a${b}c'`
    String(StringSyntax),
    /// A type name in a parameter or output declaration.
    Type(TypeSyntax),
    /// `42`
    IntegerLiteral(IntegerLiteralSyntax),
    /// `true` / `false`
    BooleanLiteral(BooleanLiteralSyntax),
    /// `null`
    NullLiteral(NullLiteralSyntax),
    /// `[ ... ]`
    Array(ArraySyntax),
    /// `{ ... }`
    Object(ObjectSyntax),
    /// `name(args...)`
    FunctionCall(FunctionCallSyntax),
    /// A reference to another declaration by name.
    VariableAccess(VariableAccessSyntax),
    /// `if (condition)`
    IfCondition(IfConditionSyntax),
    /// `= value` after a parameter type.
    ParameterDefaultValue(ParameterDefaultValueSyntax),
    /// `@name(args...)`
    Decorator(DecoratorSyntax),
    /// Input the parser skipped while recovering from an error.
    SkippedTrivia(SkippedTriviaSyntax),
}

impl SyntaxBase {
    /// Returns the kind of this node.
    #[must_use]
    pub const fn kind(&self) -> SyntaxKind {
        match self {
            Self::Token(_) => SyntaxKind::Token,
            Self::Identifier(_) => SyntaxKind::Identifier,
            Self::String(_) => SyntaxKind::String,
            Self::Type(_) => SyntaxKind::Type,
            Self::IntegerLiteral(_) => SyntaxKind::IntegerLiteral,
            Self::BooleanLiteral(_) => SyntaxKind::BooleanLiteral,
            Self::NullLiteral(_) => SyntaxKind::NullLiteral,
            Self::Array(_) => SyntaxKind::Array,
            Self::Object(_) => SyntaxKind::Object,
            Self::FunctionCall(_) => SyntaxKind::FunctionCall,
            Self::VariableAccess(_) => SyntaxKind::VariableAccess,
            Self::IfCondition(_) => SyntaxKind::IfCondition,
            Self::ParameterDefaultValue(_) => SyntaxKind::ParameterDefaultValue,
            Self::Decorator(_) => SyntaxKind::Decorator,
            Self::SkippedTrivia(_) => SyntaxKind::SkippedTrivia,
        }
    }

    /// Returns the string node, if this is one.
    #[must_use]
    pub const fn as_string(&self) -> Option<&StringSyntax> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the type node, if this is one.
    #[must_use]
    pub const fn as_type(&self) -> Option<&TypeSyntax> {
        match self {
            Self::Type(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the object node, if this is one.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectSyntax> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the token, if this is a bare token.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the decorator, if this is one.
    #[must_use]
    pub const fn as_decorator(&self) -> Option<&DecoratorSyntax> {
        match self {
            Self::Decorator(d) => Some(d),
            _ => None,
        }
    }

    /// Returns true if this node is skipped trivia.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedTrivia(_))
    }
}

impl Spanned for SyntaxBase {
    fn span(&self) -> TextSpan {
        match self {
            Self::Token(n) => n.span(),
            Self::Identifier(n) => n.span(),
            Self::String(n) => n.span(),
            Self::Type(n) => n.span(),
            Self::IntegerLiteral(n) => n.span(),
            Self::BooleanLiteral(n) => n.span(),
            Self::NullLiteral(n) => n.span(),
            Self::Array(n) => n.span(),
            Self::Object(n) => n.span(),
            Self::FunctionCall(n) => n.span(),
            Self::VariableAccess(n) => n.span(),
            Self::IfCondition(n) => n.span(),
            Self::ParameterDefaultValue(n) => n.span(),
            Self::Decorator(n) => n.span(),
            Self::SkippedTrivia(n) => n.span(),
        }
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($node:ty)),+ $(,)?) => {
        $(
            impl From<$node> for SyntaxBase {
                fn from(node: $node) -> Self {
                    Self::$variant(node)
                }
            }
        )+
    };
}

impl_from_node!(
    Token(Token),
    Identifier(IdentifierSyntax),
    String(StringSyntax),
    Type(TypeSyntax),
    IntegerLiteral(IntegerLiteralSyntax),
    BooleanLiteral(BooleanLiteralSyntax),
    NullLiteral(NullLiteralSyntax),
    Array(ArraySyntax),
    Object(ObjectSyntax),
    FunctionCall(FunctionCallSyntax),
    VariableAccess(VariableAccessSyntax),
    IfCondition(IfConditionSyntax),
    ParameterDefaultValue(ParameterDefaultValueSyntax),
    Decorator(DecoratorSyntax),
    SkippedTrivia(SkippedTriviaSyntax),
);

// =============================================================================
// Leaf Nodes
// =============================================================================

/// An identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdentifierSyntax {
    /// The identifier token.
    pub token: Token,
}

impl IdentifierSyntax {
    /// Creates an identifier node.
    ///
    /// # Panics
    ///
    /// Panics if `token` is not an identifier.
    #[must_use]
    pub fn new(token: Token) -> Self {
        assert_token_kind(Some(&token), "token", TokenKind::Identifier);
        Self { token }
    }

    /// The identifier text.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.token.text
    }
}

impl Spanned for IdentifierSyntax {
    fn span(&self) -> TextSpan {
        self.token.span
    }
}

/// A type name such as `string` or `int`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeSyntax {
    /// The identifier token naming the type.
    pub identifier: Token,
}

impl TypeSyntax {
    /// Creates a type node.
    ///
    /// # Panics
    ///
    /// Panics if `identifier` is not an identifier token.
    #[must_use]
    pub fn new(identifier: Token) -> Self {
        assert_token_kind(Some(&identifier), "identifier", TokenKind::Identifier);
        Self { identifier }
    }

    /// The type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.identifier.text
    }
}

impl Spanned for TypeSyntax {
    fn span(&self) -> TextSpan {
        self.identifier.span
    }
}

/// An integer literal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntegerLiteralSyntax {
    /// The literal token.
    pub literal: Token,
    /// The decoded value.
    pub value: u64,
}

impl IntegerLiteralSyntax {
    /// Creates an integer literal node.
    ///
    /// # Panics
    ///
    /// Panics if `literal` is not an integer token.
    #[must_use]
    pub fn new(literal: Token, value: u64) -> Self {
        assert_token_kind(Some(&literal), "literal", TokenKind::Integer);
        Self { literal, value }
    }
}

impl Spanned for IntegerLiteralSyntax {
    fn span(&self) -> TextSpan {
        self.literal.span
    }
}

/// `true` or `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BooleanLiteralSyntax {
    /// The keyword token.
    pub literal: Token,
}

impl BooleanLiteralSyntax {
    /// Creates a boolean literal node.
    ///
    /// # Panics
    ///
    /// Panics if `literal` is neither `true` nor `false`.
    #[must_use]
    pub fn new(literal: Token) -> Self {
        assert!(
            matches!(literal.kind, TokenKind::TrueKeyword | TokenKind::FalseKeyword),
            "literal must be true or false, got {}",
            literal.kind.name()
        );
        Self { literal }
    }

    /// The literal value.
    #[must_use]
    pub fn value(&self) -> bool {
        self.literal.kind == TokenKind::TrueKeyword
    }
}

impl Spanned for BooleanLiteralSyntax {
    fn span(&self) -> TextSpan {
        self.literal.span
    }
}

/// `null`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NullLiteralSyntax {
    /// The keyword token.
    pub null_keyword: Token,
}

impl NullLiteralSyntax {
    /// Creates a null literal node.
    ///
    /// # Panics
    ///
    /// Panics if the token is not `null`.
    #[must_use]
    pub fn new(null_keyword: Token) -> Self {
        assert_token_kind(Some(&null_keyword), "null_keyword", TokenKind::NullKeyword);
        Self { null_keyword }
    }
}

impl Spanned for NullLiteralSyntax {
    fn span(&self) -> TextSpan {
        self.null_keyword.span
    }
}

/// A reference to a named declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableAccessSyntax {
    /// The referenced name.
    pub name: IdentifierSyntax,
}

impl Spanned for VariableAccessSyntax {
    fn span(&self) -> TextSpan {
        self.name.span()
    }
}

/// Tokens or nodes the parser skipped while recovering from an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkippedTriviaSyntax {
    /// Where the skipped input was.
    pub span: TextSpan,
    /// The skipped input.
    pub elements: Vec<SyntaxBase>,
}

impl Spanned for SkippedTriviaSyntax {
    fn span(&self) -> TextSpan {
        self.span
    }
}

// =============================================================================
// Strings
// =============================================================================

/// A string literal, possibly interpolated.
///
/// An interpolated string `'a${x}b${y}c'` has tokens `'a${`, `}b${`, `}c'`,
/// expressions `x`, `y`, and segment values `a`, `b`, `c`. A plain string has
/// one token, no expressions, and one segment value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StringSyntax {
    string_tokens: Vec<Token>,
    expressions: Vec<SyntaxBase>,
    segment_values: Vec<String>,
}

impl StringSyntax {
    /// Creates a string node.
    ///
    /// # Panics
    ///
    /// Panics unless there is exactly one more token than expressions, one
    /// decoded value per token, and the token kinds form a valid sequence
    /// (a single complete string, or left piece, middle pieces, right piece).
    #[must_use]
    pub fn new(string_tokens: Vec<Token>, expressions: Vec<SyntaxBase>, segment_values: Vec<String>) -> Self {
        assert!(
            string_tokens.len() == expressions.len() + 1,
            "string must have one more token than expressions, got {} tokens and {} expressions",
            string_tokens.len(),
            expressions.len()
        );
        assert!(
            string_tokens.len() == segment_values.len(),
            "string must have one segment value per token"
        );

        let last = string_tokens.len() - 1;
        for (i, token) in string_tokens.iter().enumerate() {
            let expected = match (i, last) {
                (0, 0) => TokenKind::StringComplete,
                (0, _) => TokenKind::StringLeftPiece,
                (i, last) if i == last => TokenKind::StringRightPiece,
                _ => TokenKind::StringMiddlePiece,
            };
            assert_token_kind(Some(token), "string_tokens", expected);
        }

        Self {
            string_tokens,
            expressions,
            segment_values,
        }
    }

    /// The segment tokens in source order.
    #[must_use]
    pub fn string_tokens(&self) -> &[Token] {
        &self.string_tokens
    }

    /// The interpolated expressions in source order.
    #[must_use]
    pub fn expressions(&self) -> &[SyntaxBase] {
        &self.expressions
    }

    /// The decoded text of each segment.
    #[must_use]
    pub fn segment_values(&self) -> &[String] {
        &self.segment_values
    }

    /// Returns true if the string embeds expressions.
    #[must_use]
    pub fn is_interpolated(&self) -> bool {
        !self.expressions.is_empty()
    }

    /// Returns the literal value of a string without interpolation.
    #[must_use]
    pub fn try_get_literal_value(&self) -> Option<&str> {
        if self.is_interpolated() {
            return None;
        }
        self.segment_values.first().map(String::as_str)
    }
}

impl Spanned for StringSyntax {
    fn span(&self) -> TextSpan {
        // Deserialized nodes bypass `new` and may have no tokens.
        match (self.string_tokens.first(), self.string_tokens.last()) {
            (Some(first), Some(last)) => TextSpan::between(first.span, last.span),
            _ => TextSpan::NIL,
        }
    }
}

// =============================================================================
// Compound Nodes
// =============================================================================

/// `[ item, ... ]`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArraySyntax {
    /// `[`
    pub open_bracket: Token,
    /// Items in source order.
    pub items: Vec<SyntaxBase>,
    /// `]`
    pub close_bracket: Token,
}

impl ArraySyntax {
    /// Creates an array node.
    ///
    /// # Panics
    ///
    /// Panics if the brackets are the wrong tokens.
    #[must_use]
    pub fn new(open_bracket: Token, items: Vec<SyntaxBase>, close_bracket: Token) -> Self {
        assert_token_kind(Some(&open_bracket), "open_bracket", TokenKind::LeftSquare);
        assert_token_kind(Some(&close_bracket), "close_bracket", TokenKind::RightSquare);
        Self {
            open_bracket,
            items,
            close_bracket,
        }
    }
}

impl Spanned for ArraySyntax {
    fn span(&self) -> TextSpan {
        TextSpan::between(self.open_bracket.span, self.close_bracket.span)
    }
}

/// `key: value` inside an object.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectPropertySyntax {
    /// Identifier or string key.
    pub key: Box<SyntaxBase>,
    /// `:`
    pub colon: Token,
    /// The property value.
    pub value: Box<SyntaxBase>,
}

impl ObjectPropertySyntax {
    /// Creates an object property node.
    ///
    /// # Panics
    ///
    /// Panics if the key is not an identifier or string, or `colon` is not `:`.
    #[must_use]
    pub fn new(key: SyntaxBase, colon: Token, value: SyntaxBase) -> Self {
        assert_syntax_kind(
            Some(&key),
            "key",
            &[SyntaxKind::Identifier, SyntaxKind::String, SyntaxKind::SkippedTrivia],
        );
        assert_token_kind(Some(&colon), "colon", TokenKind::Colon);
        Self {
            key: Box::new(key),
            colon,
            value: Box::new(value),
        }
    }

    /// Returns the key text, unless the key is interpolated or skipped.
    #[must_use]
    pub fn try_get_key_text(&self) -> Option<&str> {
        match self.key.as_ref() {
            SyntaxBase::Identifier(identifier) => Some(identifier.name()),
            SyntaxBase::String(string) => string.try_get_literal_value(),
            _ => None,
        }
    }
}

impl Spanned for ObjectPropertySyntax {
    fn span(&self) -> TextSpan {
        TextSpan::between(self.key.span(), self.value.span())
    }
}

/// `{ key: value ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectSyntax {
    /// `{`
    pub open_brace: Token,
    /// Properties in source order.
    pub properties: Vec<ObjectPropertySyntax>,
    /// `}`
    pub close_brace: Token,
}

impl ObjectSyntax {
    /// Creates an object node.
    ///
    /// # Panics
    ///
    /// Panics if the braces are the wrong tokens.
    #[must_use]
    pub fn new(open_brace: Token, properties: Vec<ObjectPropertySyntax>, close_brace: Token) -> Self {
        assert_token_kind(Some(&open_brace), "open_brace", TokenKind::LeftBrace);
        assert_token_kind(Some(&close_brace), "close_brace", TokenKind::RightBrace);
        Self {
            open_brace,
            properties,
            close_brace,
        }
    }

    /// Finds a property by key text.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&ObjectPropertySyntax> {
        self.properties
            .iter()
            .find(|p| p.try_get_key_text() == Some(key))
    }
}

impl Spanned for ObjectSyntax {
    fn span(&self) -> TextSpan {
        TextSpan::between(self.open_brace.span, self.close_brace.span)
    }
}

/// One argument of a function call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionArgumentSyntax {
    /// The argument expression.
    pub expression: SyntaxBase,
    /// The trailing `,`, if any.
    pub comma: Option<Token>,
}

impl FunctionArgumentSyntax {
    /// Creates an argument node.
    ///
    /// # Panics
    ///
    /// Panics if `comma` is present but not a comma token.
    #[must_use]
    pub fn new(expression: SyntaxBase, comma: Option<Token>) -> Self {
        assert_token_kind(comma.as_ref(), "comma", TokenKind::Comma);
        Self { expression, comma }
    }
}

impl Spanned for FunctionArgumentSyntax {
    fn span(&self) -> TextSpan {
        match &self.comma {
            Some(comma) => TextSpan::between(self.expression.span(), comma.span),
            None => self.expression.span(),
        }
    }
}

/// `name(arg, ...)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionCallSyntax {
    /// The function name.
    pub name: IdentifierSyntax,
    /// `(`
    pub open_paren: Token,
    /// Arguments in source order.
    pub arguments: Vec<FunctionArgumentSyntax>,
    /// `)`
    pub close_paren: Token,
}

impl FunctionCallSyntax {
    /// Creates a function call node.
    ///
    /// # Panics
    ///
    /// Panics if the parentheses are the wrong tokens.
    #[must_use]
    pub fn new(
        name: IdentifierSyntax,
        open_paren: Token,
        arguments: Vec<FunctionArgumentSyntax>,
        close_paren: Token,
    ) -> Self {
        assert_token_kind(Some(&open_paren), "open_paren", TokenKind::LeftParen);
        assert_token_kind(Some(&close_paren), "close_paren", TokenKind::RightParen);
        Self {
            name,
            open_paren,
            arguments,
            close_paren,
        }
    }
}

impl Spanned for FunctionCallSyntax {
    fn span(&self) -> TextSpan {
        TextSpan::between(self.name.span(), self.close_paren.span)
    }
}

/// `if (condition)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IfConditionSyntax {
    /// `if`
    pub keyword: Token,
    /// The condition expression.
    pub condition: Box<SyntaxBase>,
}

impl IfConditionSyntax {
    /// Creates a condition node.
    ///
    /// # Panics
    ///
    /// Panics if `keyword` is not `if`.
    #[must_use]
    pub fn new(keyword: Token, condition: SyntaxBase) -> Self {
        assert_keyword(Some(&keyword), "keyword", "if");
        Self {
            keyword,
            condition: Box::new(condition),
        }
    }
}

impl Spanned for IfConditionSyntax {
    fn span(&self) -> TextSpan {
        TextSpan::between(self.keyword.span, self.condition.span())
    }
}

/// `= value` after a parameter's type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParameterDefaultValueSyntax {
    /// `=`
    pub assignment: Token,
    /// The default value expression.
    pub default_value: Box<SyntaxBase>,
}

impl ParameterDefaultValueSyntax {
    /// Creates a default value node.
    ///
    /// # Panics
    ///
    /// Panics if `assignment` is not `=`.
    #[must_use]
    pub fn new(assignment: Token, default_value: SyntaxBase) -> Self {
        assert_token_kind(Some(&assignment), "assignment", TokenKind::Assignment);
        Self {
            assignment,
            default_value: Box::new(default_value),
        }
    }
}

impl Spanned for ParameterDefaultValueSyntax {
    fn span(&self) -> TextSpan {
        TextSpan::between(self.assignment.span, self.default_value.span())
    }
}

/// `@name(args...)` attached to the declaration that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecoratorSyntax {
    /// `@`
    pub at: Token,
    /// The decorator call.
    pub expression: FunctionCallSyntax,
}

impl DecoratorSyntax {
    /// Creates a decorator node.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not `@`.
    #[must_use]
    pub fn new(at: Token, expression: FunctionCallSyntax) -> Self {
        assert_token_kind(Some(&at), "at", TokenKind::At);
        Self { at, expression }
    }

    /// The decorator name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.expression.name.name()
    }

    /// The arguments in source order.
    #[must_use]
    pub fn arguments(&self) -> &[FunctionArgumentSyntax] {
        &self.expression.arguments
    }
}

impl Spanned for DecoratorSyntax {
    fn span(&self) -> TextSpan {
        TextSpan::between(self.at.span, self.expression.span())
    }
}

impl fmt::Display for DecoratorSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}({} args)", self.name(), self.arguments().len())
    }
}
