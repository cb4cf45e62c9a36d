//! Immutable, shape-validated declaration syntax for Quarry.
//!
//! This crate provides:
//! - [`Token`] - Lexer output carried by syntax nodes
//! - [`SyntaxBase`] - Expression and declaration-part nodes
//! - [`Declaration`] - Resource, output and parameter declarations
//! - [`SyntaxFactory`] - Programmatic tree construction
//!
//! Trees come from an external parser. Constructors assert the shape the
//! grammar guarantees and panic otherwise.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod declaration;
pub mod factory;
pub mod syntax;
pub mod token;


pub use declaration::{
    Declaration, DeclarationKind, OutputDeclarationSyntax, ParameterDeclarationSyntax,
    ProgramSyntax, ResourceDeclarationSyntax,
};
pub use factory::SyntaxFactory;
pub use syntax::{
    ArraySyntax, BooleanLiteralSyntax, DecoratorSyntax, FunctionArgumentSyntax,
    FunctionCallSyntax, IdentifierSyntax, IfConditionSyntax, IntegerLiteralSyntax,
    NullLiteralSyntax, ObjectPropertySyntax, ObjectSyntax, ParameterDefaultValueSyntax,
    SkippedTriviaSyntax, StringSyntax, SyntaxBase, SyntaxKind, TypeSyntax, VariableAccessSyntax,
};
pub use token::{Token, TokenKind};
