//! Programmatic construction of syntax trees.
//!
//! `SyntaxFactory` hands out tokens with increasing synthetic spans, so trees
//! built in source order have spans that nest the way a parser's would.
//! Children that appear after their parent's first token are produced by
//! closures, which keeps that order without the caller tracking offsets.

use crate::declaration::{
    EXISTING_KEYWORD, OUTPUT_KEYWORD, OutputDeclarationSyntax, PARAMETER_KEYWORD,
    ParameterDeclarationSyntax, RESOURCE_KEYWORD, ResourceDeclarationSyntax,
};
use crate::syntax::{
    ArraySyntax, BooleanLiteralSyntax, DecoratorSyntax, FunctionArgumentSyntax,
    FunctionCallSyntax, IdentifierSyntax, IntegerLiteralSyntax, NullLiteralSyntax,
    ObjectPropertySyntax, ObjectSyntax, ParameterDefaultValueSyntax, SkippedTriviaSyntax,
    StringSyntax, SyntaxBase, TypeSyntax, VariableAccessSyntax,
};
use crate::token::{Token, TokenKind};
use quarry_foundation::TextSpan;

/// Builds syntax nodes with synthetic, monotonically increasing spans.
#[derive(Debug, Default)]
pub struct SyntaxFactory {
    offset: usize,
}

impl SyntaxFactory {
    /// Creates a factory starting at offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The offset the next token will start at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Creates a token covering `text`, followed by one byte of whitespace.
    pub fn token(&mut self, kind: TokenKind, text: &str) -> Token {
        let span = TextSpan::new(self.offset, text.len());
        self.offset += text.len() + 1;
        Token::new(kind, text, span)
    }

    /// Creates an identifier token used as a keyword.
    pub fn keyword(&mut self, text: &str) -> Token {
        self.token(TokenKind::Identifier, text)
    }

    /// A newline between leading nodes.
    pub fn newline(&mut self) -> SyntaxBase {
        self.token(TokenKind::NewLine, "\n").into()
    }

    /// `=`
    pub fn assignment(&mut self) -> SyntaxBase {
        self.token(TokenKind::Assignment, "=").into()
    }

    /// An identifier node.
    pub fn identifier(&mut self, name: &str) -> IdentifierSyntax {
        IdentifierSyntax::new(self.token(TokenKind::Identifier, name))
    }

    /// A type name node.
    pub fn type_syntax(&mut self, name: &str) -> SyntaxBase {
        TypeSyntax::new(self.token(TokenKind::Identifier, name)).into()
    }

    /// A plain string literal.
    pub fn string(&mut self, value: &str) -> SyntaxBase {
        let token = self.token(TokenKind::StringComplete, &format!("'{value}'"));
        StringSyntax::new(vec![token], Vec::new(), vec![value.to_string()]).into()
    }

    /// An interpolated string `'s0${v0}s1${v1}...'` where each `vN` is a
    /// variable reference.
    ///
    /// # Panics
    ///
    /// Panics unless there is exactly one more segment than variables.
    pub fn interpolated_string(&mut self, segments: &[&str], variables: &[&str]) -> SyntaxBase {
        assert!(
            segments.len() == variables.len() + 1,
            "interpolated string needs one more segment than variables"
        );
        let last = segments.len() - 1;
        let mut tokens = Vec::with_capacity(segments.len());
        let mut expressions = Vec::with_capacity(variables.len());
        for (i, segment) in segments.iter().enumerate() {
            let (kind, text) = match (i, last) {
                (0, 0) => (TokenKind::StringComplete, format!("'{segment}'")),
                (0, _) => (TokenKind::StringLeftPiece, format!("'{segment}${{")),
                (i, last) if i == last => (TokenKind::StringRightPiece, format!("}}{segment}'")),
                _ => (TokenKind::StringMiddlePiece, format!("}}{segment}${{")),
            };
            tokens.push(self.token(kind, &text));
            if let Some(variable) = variables.get(i) {
                expressions.push(self.variable(variable));
            }
        }
        let values = segments.iter().map(ToString::to_string).collect();
        StringSyntax::new(tokens, expressions, values).into()
    }

    /// An integer literal.
    pub fn integer(&mut self, value: u64) -> SyntaxBase {
        let token = self.token(TokenKind::Integer, &value.to_string());
        IntegerLiteralSyntax::new(token, value).into()
    }

    /// `true` or `false`.
    pub fn boolean(&mut self, value: bool) -> SyntaxBase {
        let token = if value {
            self.token(TokenKind::TrueKeyword, "true")
        } else {
            self.token(TokenKind::FalseKeyword, "false")
        };
        BooleanLiteralSyntax::new(token).into()
    }

    /// `null`
    pub fn null(&mut self) -> SyntaxBase {
        NullLiteralSyntax::new(self.token(TokenKind::NullKeyword, "null")).into()
    }

    /// A reference to a named declaration.
    pub fn variable(&mut self, name: &str) -> SyntaxBase {
        VariableAccessSyntax {
            name: self.identifier(name),
        }
        .into()
    }

    /// Skipped input standing in for a node the parser could not read.
    pub fn skipped(&mut self, text: &str) -> SyntaxBase {
        let token = self.token(TokenKind::Unrecognized, text);
        SkippedTriviaSyntax {
            span: token.span,
            elements: vec![token.into()],
        }
        .into()
    }

    /// `[ items... ]`
    pub fn array(&mut self, items: impl FnOnce(&mut Self) -> Vec<SyntaxBase>) -> SyntaxBase {
        let open = self.token(TokenKind::LeftSquare, "[");
        let items = items(self);
        let close = self.token(TokenKind::RightSquare, "]");
        ArraySyntax::new(open, items, close).into()
    }

    /// `{ properties... }`
    pub fn object(
        &mut self,
        properties: impl FnOnce(&mut Self) -> Vec<ObjectPropertySyntax>,
    ) -> SyntaxBase {
        let open = self.token(TokenKind::LeftBrace, "{");
        let properties = properties(self);
        let close = self.token(TokenKind::RightBrace, "}");
        ObjectSyntax::new(open, properties, close).into()
    }

    /// `key: value`
    pub fn property(
        &mut self,
        key: &str,
        value: impl FnOnce(&mut Self) -> SyntaxBase,
    ) -> ObjectPropertySyntax {
        let key = self.identifier(key).into();
        let colon = self.token(TokenKind::Colon, ":");
        let value = value(self);
        ObjectPropertySyntax::new(key, colon, value)
    }

    /// `name(arguments...)`
    pub fn call(
        &mut self,
        name: &str,
        arguments: impl FnOnce(&mut Self) -> Vec<SyntaxBase>,
    ) -> FunctionCallSyntax {
        let name = self.identifier(name);
        let open = self.token(TokenKind::LeftParen, "(");
        let expressions = arguments(self);
        let count = expressions.len();
        let mut arguments = Vec::with_capacity(count);
        for (i, expression) in expressions.into_iter().enumerate() {
            let comma = (i + 1 < count).then(|| self.token(TokenKind::Comma, ","));
            arguments.push(FunctionArgumentSyntax::new(expression, comma));
        }
        let close = self.token(TokenKind::RightParen, ")");
        FunctionCallSyntax::new(name, open, arguments, close)
    }

    /// `@name(arguments...)`
    pub fn decorator(
        &mut self,
        name: &str,
        arguments: impl FnOnce(&mut Self) -> Vec<SyntaxBase>,
    ) -> SyntaxBase {
        let at = self.token(TokenKind::At, "@");
        let call = self.call(name, arguments);
        DecoratorSyntax::new(at, call).into()
    }

    /// `resource name <type> [existing] = <body>`
    pub fn resource(
        &mut self,
        leading_nodes: Vec<SyntaxBase>,
        name: &str,
        type_reference: impl FnOnce(&mut Self) -> SyntaxBase,
        existing: bool,
        body: impl FnOnce(&mut Self) -> SyntaxBase,
    ) -> ResourceDeclarationSyntax {
        let keyword = self.keyword(RESOURCE_KEYWORD);
        let name = self.identifier(name);
        let type_reference = type_reference(self);
        let existing_keyword = existing.then(|| self.keyword(EXISTING_KEYWORD));
        let assignment = self.assignment();
        let body = body(self);
        ResourceDeclarationSyntax::new(
            leading_nodes,
            keyword,
            name,
            type_reference,
            existing_keyword,
            assignment,
            None,
            body,
        )
    }

    /// `output name type = <value>`
    pub fn output(
        &mut self,
        leading_nodes: Vec<SyntaxBase>,
        name: &str,
        type_name: &str,
        value: impl FnOnce(&mut Self) -> SyntaxBase,
    ) -> OutputDeclarationSyntax {
        let keyword = self.keyword(OUTPUT_KEYWORD);
        let name = self.identifier(name);
        let output_type = self.type_syntax(type_name);
        let assignment = self.assignment();
        let value = value(self);
        OutputDeclarationSyntax::new(leading_nodes, keyword, name, output_type, assignment, value)
    }

    /// `param name type`
    pub fn parameter(
        &mut self,
        leading_nodes: Vec<SyntaxBase>,
        name: &str,
        type_name: &str,
    ) -> ParameterDeclarationSyntax {
        let keyword = self.keyword(PARAMETER_KEYWORD);
        let name = self.identifier(name);
        let parameter_type = self.type_syntax(type_name);
        ParameterDeclarationSyntax::new(leading_nodes, keyword, name, parameter_type, None)
    }

    /// `param name type = <default>`
    pub fn parameter_with_default(
        &mut self,
        leading_nodes: Vec<SyntaxBase>,
        name: &str,
        type_name: &str,
        default_value: impl FnOnce(&mut Self) -> SyntaxBase,
    ) -> ParameterDeclarationSyntax {
        let keyword = self.keyword(PARAMETER_KEYWORD);
        let name = self.identifier(name);
        let parameter_type = self.type_syntax(type_name);
        let assignment = self.token(TokenKind::Assignment, "=");
        let default_value = default_value(self);
        let modifier = ParameterDefaultValueSyntax::new(assignment, default_value).into();
        ParameterDeclarationSyntax::new(
            leading_nodes,
            keyword,
            name,
            parameter_type,
            Some(modifier),
        )
    }
}
