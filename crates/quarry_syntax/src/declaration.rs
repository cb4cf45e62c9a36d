//! Top-level declarations.
//!
//! A program is a sequence of declarations. Each declaration owns its child
//! nodes and the decorators written above it.
//!
//! The flow is: Source → Parser (external) → Declaration → Type resolution

use quarry_foundation::{Spanned, TextSpan};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::syntax::{
    DecoratorSyntax, IdentifierSyntax, SyntaxBase, SyntaxKind, TypeSyntax, assert_keyword,
    assert_syntax_kind, assert_token_kind,
};
use crate::token::{Token, TokenKind};

/// `resource`
pub const RESOURCE_KEYWORD: &str = "resource";
/// `output`
pub const OUTPUT_KEYWORD: &str = "output";
/// `param`
pub const PARAMETER_KEYWORD: &str = "param";
/// `existing`
pub const EXISTING_KEYWORD: &str = "existing";

/// Checks that an assignment slot holds `=` or skipped trivia.
fn assert_assignment(assignment: &SyntaxBase) {
    assert_syntax_kind(
        Some(assignment),
        "assignment",
        &[SyntaxKind::Token, SyntaxKind::SkippedTrivia],
    );
    assert_token_kind(assignment.as_token(), "assignment", TokenKind::Assignment);
}

/// Checks that leading nodes are decorators or newlines.
fn assert_leading_nodes(leading_nodes: &[SyntaxBase]) {
    for node in leading_nodes {
        assert_syntax_kind(
            Some(node),
            "leading_nodes",
            &[SyntaxKind::Decorator, SyntaxKind::Token],
        );
        assert_token_kind(node.as_token(), "leading_nodes", TokenKind::NewLine);
    }
}

fn decorators_of(leading_nodes: &[SyntaxBase]) -> impl Iterator<Item = &DecoratorSyntax> {
    leading_nodes.iter().filter_map(SyntaxBase::as_decorator)
}

// =============================================================================
// Resource Declaration
// =============================================================================

/// A resource declaration.
///
/// ```text
/// @description('...')
/// resource name 'Provider.Namespace/type@2021-01-01' existing = if (cond) {
///   ...
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourceDeclarationSyntax {
    leading_nodes: Vec<SyntaxBase>,
    keyword: Token,
    name: IdentifierSyntax,
    type_reference: SyntaxBase,
    existing_keyword: Option<Token>,
    assignment: SyntaxBase,
    if_condition: Option<SyntaxBase>,
    body: SyntaxBase,
}

impl ResourceDeclarationSyntax {
    /// Creates a resource declaration.
    ///
    /// # Panics
    ///
    /// Panics if any child has a shape the grammar never produces: a keyword
    /// that is not `resource`, an `existing` marker that is not `existing`, an
    /// assignment that is not `=`, a type that is not a string, a condition
    /// that is not `if (...)`, or a body that is not an object.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        leading_nodes: Vec<SyntaxBase>,
        keyword: Token,
        name: IdentifierSyntax,
        type_reference: SyntaxBase,
        existing_keyword: Option<Token>,
        assignment: SyntaxBase,
        if_condition: Option<SyntaxBase>,
        body: SyntaxBase,
    ) -> Self {
        assert_leading_nodes(&leading_nodes);
        assert_keyword(Some(&keyword), "keyword", RESOURCE_KEYWORD);
        assert_syntax_kind(
            Some(&type_reference),
            "type_reference",
            &[SyntaxKind::String, SyntaxKind::SkippedTrivia],
        );
        assert_keyword(existing_keyword.as_ref(), "existing_keyword", EXISTING_KEYWORD);
        assert_assignment(&assignment);
        assert_syntax_kind(
            if_condition.as_ref(),
            "if_condition",
            &[SyntaxKind::IfCondition, SyntaxKind::SkippedTrivia],
        );
        assert_syntax_kind(
            Some(&body),
            "body",
            &[SyntaxKind::Object, SyntaxKind::SkippedTrivia],
        );

        Self {
            leading_nodes,
            keyword,
            name,
            type_reference,
            existing_keyword,
            assignment,
            if_condition,
            body,
        }
    }

    /// Decorators and newlines preceding the keyword.
    #[must_use]
    pub fn leading_nodes(&self) -> &[SyntaxBase] {
        &self.leading_nodes
    }

    /// The `resource` keyword.
    #[must_use]
    pub fn keyword(&self) -> &Token {
        &self.keyword
    }

    /// The symbolic name.
    #[must_use]
    pub fn name(&self) -> &IdentifierSyntax {
        &self.name
    }

    /// The type reference node (a string, or skipped trivia).
    #[must_use]
    pub fn type_reference(&self) -> &SyntaxBase {
        &self.type_reference
    }

    /// The type reference as a string node, if it is one.
    #[must_use]
    pub fn type_string(&self) -> Option<&crate::syntax::StringSyntax> {
        self.type_reference.as_string()
    }

    /// The `existing` marker.
    #[must_use]
    pub fn existing_keyword(&self) -> Option<&Token> {
        self.existing_keyword.as_ref()
    }

    /// Returns true if this declaration references a pre-existing resource.
    #[must_use]
    pub fn is_existing_resource(&self) -> bool {
        self.existing_keyword.is_some()
    }

    /// The `=` (or skipped trivia).
    #[must_use]
    pub fn assignment(&self) -> &SyntaxBase {
        &self.assignment
    }

    /// The `if (...)` condition.
    #[must_use]
    pub fn if_condition(&self) -> Option<&SyntaxBase> {
        self.if_condition.as_ref()
    }

    /// The body (an object, or skipped trivia).
    #[must_use]
    pub fn body(&self) -> &SyntaxBase {
        &self.body
    }

    /// Decorators in source order.
    pub fn decorators(&self) -> impl Iterator<Item = &DecoratorSyntax> {
        decorators_of(&self.leading_nodes)
    }
}

impl Spanned for ResourceDeclarationSyntax {
    fn span(&self) -> TextSpan {
        TextSpan::between(self.keyword.span, self.body.span())
    }
}

// =============================================================================
// Output Declaration
// =============================================================================

/// An output declaration: `output name type = value`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputDeclarationSyntax {
    leading_nodes: Vec<SyntaxBase>,
    keyword: Token,
    name: IdentifierSyntax,
    output_type: SyntaxBase,
    assignment: SyntaxBase,
    value: SyntaxBase,
}

impl OutputDeclarationSyntax {
    /// Creates an output declaration.
    ///
    /// # Panics
    ///
    /// Panics if the keyword is not `output`, the type is not a type name, or
    /// the assignment is not `=`.
    #[must_use]
    pub fn new(
        leading_nodes: Vec<SyntaxBase>,
        keyword: Token,
        name: IdentifierSyntax,
        output_type: SyntaxBase,
        assignment: SyntaxBase,
        value: SyntaxBase,
    ) -> Self {
        assert_leading_nodes(&leading_nodes);
        assert_keyword(Some(&keyword), "keyword", OUTPUT_KEYWORD);
        assert_syntax_kind(
            Some(&output_type),
            "output_type",
            &[SyntaxKind::Type, SyntaxKind::SkippedTrivia],
        );
        assert_assignment(&assignment);

        Self {
            leading_nodes,
            keyword,
            name,
            output_type,
            assignment,
            value,
        }
    }

    /// Decorators and newlines preceding the keyword.
    #[must_use]
    pub fn leading_nodes(&self) -> &[SyntaxBase] {
        &self.leading_nodes
    }

    /// The `output` keyword.
    #[must_use]
    pub fn keyword(&self) -> &Token {
        &self.keyword
    }

    /// The output name.
    #[must_use]
    pub fn name(&self) -> &IdentifierSyntax {
        &self.name
    }

    /// The type node (a type name, or skipped trivia).
    #[must_use]
    pub fn output_type_node(&self) -> &SyntaxBase {
        &self.output_type
    }

    /// The declared type name, if well-formed.
    #[must_use]
    pub fn output_type(&self) -> Option<&TypeSyntax> {
        self.output_type.as_type()
    }

    /// The `=` (or skipped trivia).
    #[must_use]
    pub fn assignment(&self) -> &SyntaxBase {
        &self.assignment
    }

    /// The value expression.
    #[must_use]
    pub fn value(&self) -> &SyntaxBase {
        &self.value
    }

    /// Decorators in source order.
    pub fn decorators(&self) -> impl Iterator<Item = &DecoratorSyntax> {
        decorators_of(&self.leading_nodes)
    }
}

impl Spanned for OutputDeclarationSyntax {
    fn span(&self) -> TextSpan {
        TextSpan::between(self.keyword.span, self.value.span())
    }
}

// =============================================================================
// Parameter Declaration
// =============================================================================

/// A parameter declaration: `param name type` with an optional `= default`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParameterDeclarationSyntax {
    leading_nodes: Vec<SyntaxBase>,
    keyword: Token,
    name: IdentifierSyntax,
    parameter_type: SyntaxBase,
    modifier: Option<SyntaxBase>,
}

impl ParameterDeclarationSyntax {
    /// Creates a parameter declaration.
    ///
    /// # Panics
    ///
    /// Panics if the keyword is not `param`, the type is not a type name, or
    /// the modifier is neither a default value nor a modifier object.
    #[must_use]
    pub fn new(
        leading_nodes: Vec<SyntaxBase>,
        keyword: Token,
        name: IdentifierSyntax,
        parameter_type: SyntaxBase,
        modifier: Option<SyntaxBase>,
    ) -> Self {
        assert_leading_nodes(&leading_nodes);
        assert_keyword(Some(&keyword), "keyword", PARAMETER_KEYWORD);
        assert_syntax_kind(
            Some(&parameter_type),
            "parameter_type",
            &[SyntaxKind::Type, SyntaxKind::SkippedTrivia],
        );
        assert_syntax_kind(
            modifier.as_ref(),
            "modifier",
            &[
                SyntaxKind::ParameterDefaultValue,
                SyntaxKind::Object,
                SyntaxKind::SkippedTrivia,
            ],
        );

        Self {
            leading_nodes,
            keyword,
            name,
            parameter_type,
            modifier,
        }
    }

    /// Decorators and newlines preceding the keyword.
    #[must_use]
    pub fn leading_nodes(&self) -> &[SyntaxBase] {
        &self.leading_nodes
    }

    /// The `param` keyword.
    #[must_use]
    pub fn keyword(&self) -> &Token {
        &self.keyword
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &IdentifierSyntax {
        &self.name
    }

    /// The type node (a type name, or skipped trivia).
    #[must_use]
    pub fn parameter_type_node(&self) -> &SyntaxBase {
        &self.parameter_type
    }

    /// The declared type name, if well-formed.
    #[must_use]
    pub fn parameter_type(&self) -> Option<&TypeSyntax> {
        self.parameter_type.as_type()
    }

    /// The default value or modifier object.
    #[must_use]
    pub fn modifier(&self) -> Option<&SyntaxBase> {
        self.modifier.as_ref()
    }

    /// Decorators in source order.
    pub fn decorators(&self) -> impl Iterator<Item = &DecoratorSyntax> {
        decorators_of(&self.leading_nodes)
    }
}

impl Spanned for ParameterDeclarationSyntax {
    fn span(&self) -> TextSpan {
        let last = self
            .modifier
            .as_ref()
            .map_or_else(|| self.parameter_type.span(), Spanned::span);
        TextSpan::between(self.keyword.span, last)
    }
}

// =============================================================================
// Declaration
// =============================================================================

/// The kind of a declaration, for decorator applicability checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeclarationKind {
    /// `resource`
    Resource,
    /// `output`
    Output,
    /// `param`
    Parameter,
}

/// Any top-level declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Declaration {
    /// A resource declaration.
    Resource(ResourceDeclarationSyntax),
    /// An output declaration.
    Output(OutputDeclarationSyntax),
    /// A parameter declaration.
    Parameter(ParameterDeclarationSyntax),
}

impl Declaration {
    /// Returns the kind of this declaration.
    #[must_use]
    pub const fn kind(&self) -> DeclarationKind {
        match self {
            Self::Resource(_) => DeclarationKind::Resource,
            Self::Output(_) => DeclarationKind::Output,
            Self::Parameter(_) => DeclarationKind::Parameter,
        }
    }

    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &IdentifierSyntax {
        match self {
            Self::Resource(d) => d.name(),
            Self::Output(d) => d.name(),
            Self::Parameter(d) => d.name(),
        }
    }

    /// Decorators in source order.
    #[must_use]
    pub fn decorators(&self) -> Vec<&DecoratorSyntax> {
        match self {
            Self::Resource(d) => d.decorators().collect(),
            Self::Output(d) => d.decorators().collect(),
            Self::Parameter(d) => d.decorators().collect(),
        }
    }
}

impl Spanned for Declaration {
    fn span(&self) -> TextSpan {
        match self {
            Self::Resource(d) => d.span(),
            Self::Output(d) => d.span(),
            Self::Parameter(d) => d.span(),
        }
    }
}

impl From<ResourceDeclarationSyntax> for Declaration {
    fn from(d: ResourceDeclarationSyntax) -> Self {
        Self::Resource(d)
    }
}

impl From<OutputDeclarationSyntax> for Declaration {
    fn from(d: OutputDeclarationSyntax) -> Self {
        Self::Output(d)
    }
}

impl From<ParameterDeclarationSyntax> for Declaration {
    fn from(d: ParameterDeclarationSyntax) -> Self {
        Self::Parameter(d)
    }
}

/// A parsed file: declarations in source order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramSyntax {
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl ProgramSyntax {
    /// Creates a program from declarations in source order.
    #[must_use]
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }
}
